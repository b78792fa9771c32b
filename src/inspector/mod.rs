//! Frame stack inspector.
//!
//! Once per tick: sample the chain of frames under the cursor, compare it
//! with the chain rendered last, and only reposition the highlight regions
//! when it changed. Highlight visibility is reconciled every tick because
//! sampling hides every region first. The details panel is hidden during
//! sampling and redrawn next to the cursor whenever the chain is non-empty.

mod chain;
mod format;
mod highlight;
mod host;
mod panel;
mod sampler;

#[cfg(test)]
pub(crate) mod test_host;

pub use chain::{has_changed, FrameChain, StackEntry};
pub use format::{format_details, strip_color_codes, visible_len, ANONYMOUS, UNKNOWN};
pub use highlight::{HighlightPool, HighlightRegion};
pub use host::{AnchorInfo, FrameDetails, FrameHost, FrameId, HitTest, OverlayKind};
pub use panel::{panel_size, place_panel, DetailsPanel, PanelContents};
pub use sampler::{sample, walk_chain, DepthPolicy, SampleOptions};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::InspectorConfig;
use crate::hit::HitTestOptions;
use crate::layout::LayoutRect;

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Inspector is off; nothing was touched.
    Inactive,
    /// The chain under the cursor differs from the last rendered one.
    Changed,
    /// Same chain as last tick; only visibility was reconciled.
    Unchanged,
}

/// The inspector's whole state: activation flag, last rendered chain and
/// the overlay frames it owns.
#[derive(Debug)]
pub struct FrameStackInspector {
    options: SampleOptions,
    active: bool,
    last_chain: FrameChain,
    pool: HighlightPool,
    panel: DetailsPanel,
}

impl FrameStackInspector {
    /// Create the inspector and its overlay frames. Starts inactive.
    pub fn new<H: FrameHost + ?Sized>(host: &mut H, config: &InspectorConfig) -> Self {
        let options = config.sample_options();
        let pool = HighlightPool::new(host, options.max_depth, &config.depth_colors);
        let panel = DetailsPanel::new(host, config.panel_offset);
        Self { options, active: false, last_chain: FrameChain::new(), pool, panel }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn options(&self) -> &SampleOptions {
        &self.options
    }

    /// Change the hit-test flags; takes effect on the next tick.
    pub fn set_hit_options(&mut self, hit: HitTestOptions) {
        self.options.hit = hit;
    }

    pub fn last_chain(&self) -> &FrameChain {
        &self.last_chain
    }

    pub fn pool(&self) -> &HighlightPool {
        &self.pool
    }

    pub fn panel(&self) -> &DetailsPanel {
        &self.panel
    }

    /// Flip activation. Returns the new state.
    pub fn toggle<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.active {
            self.deactivate(host);
        } else {
            self.activate();
        }
        self.active
    }

    pub fn activate(&mut self) {
        if self.active {
            debug!("frame stack inspector already active");
            return;
        }
        self.active = true;
        info!(max_depth = self.options.max_depth, "frame stack inspector enabled");
    }

    /// Hide every overlay frame and forget the last chain.
    pub fn deactivate<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.pool.hide_all(host);
        self.panel.hide(host);
        self.last_chain.clear();
        if self.active {
            info!("frame stack inspector disabled");
        }
        self.active = false;
    }

    /// One display tick at the given cursor position.
    pub fn tick<H: FrameHost + ?Sized>(&mut self, host: &mut H, cursor: (f32, f32)) -> TickOutcome {
        if !self.active {
            return TickOutcome::Inactive;
        }

        // The panel may sit under the cursor until it is moved below.
        self.panel.hide(host);
        let chain = sample(host, &mut self.pool, cursor, &self.options);
        if !has_changed(&self.last_chain, &chain) {
            self.pool.reconcile_visibility(host, &self.last_chain);
            self.refresh_panel(host, cursor);
            return TickOutcome::Unchanged;
        }

        debug!(depth = chain.len(), top = ?chain.top(), "frame stack changed");
        self.render(host, &chain, cursor);
        self.last_chain = chain;
        TickOutcome::Changed
    }

    /// Redescribe the topmost frame of the last chain next to the cursor,
    /// or hide the panel when the chain is empty.
    fn refresh_panel<H: FrameHost + ?Sized>(&mut self, host: &mut H, cursor: (f32, f32)) {
        match self.last_chain.top() {
            Some(top) => self.panel.refresh(host, top, cursor),
            None => self.panel.hide(host),
        }
    }

    /// Place highlights over `chain` and describe its topmost frame.
    pub fn render<H: FrameHost + ?Sized>(&mut self, host: &mut H, chain: &FrameChain, cursor: (f32, f32)) {
        self.pool.assign(host, chain);
        match chain.top() {
            Some(top) => self.panel.refresh(host, top, cursor),
            None => self.panel.hide(host),
        }
    }

    /// Serializable view of the current overlay state.
    pub fn report<H: FrameHost + ?Sized>(&self, host: &H) -> InspectorReport {
        InspectorReport {
            active: self.active,
            chain: self
                .last_chain
                .iter()
                .map(|e| ChainEntryReport {
                    depth: e.depth,
                    frame: e.frame,
                    name: host.frame_details(e.frame).name,
                    rect: host.frame_rect(e.frame),
                })
                .collect(),
            regions: self.pool.regions().to_vec(),
            panel: self.panel.contents().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainEntryReport {
    pub depth: usize,
    pub frame: FrameId,
    pub name: Option<String>,
    pub rect: Option<LayoutRect>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectorReport {
    pub active: bool,
    pub chain: Vec<ChainEntryReport>,
    pub regions: Vec<HighlightRegion>,
    pub panel: Option<PanelContents>,
}
