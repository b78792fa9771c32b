//! Fixed pool of highlight regions, one per stack depth.

use serde::Serialize;

use super::chain::FrameChain;
use super::host::{FrameHost, FrameId, OverlayKind};
use crate::layout::LayoutRect;
use crate::widget::Color;

/// One overlay rectangle. Its color is fixed by depth when the pool is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightRegion {
    pub depth: usize,
    /// Overlay frame backing this region.
    pub frame: FrameId,
    pub color: Color,
    /// Inspected frame the region was last placed over.
    pub target: Option<FrameId>,
    pub rect: Option<LayoutRect>,
    pub shown: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightPool {
    regions: Vec<HighlightRegion>,
}

impl HighlightPool {
    /// Allocate `size` hidden regions. Colors cycle through `colors`.
    pub fn new<H: FrameHost + ?Sized>(host: &mut H, size: usize, colors: &[Color]) -> Self {
        let fallback = [Color::new(0.0, 1.0, 0.0, 0.4)];
        let colors = if colors.is_empty() { &fallback[..] } else { colors };
        let regions = (0..size)
            .map(|depth| {
                let frame = host.create_overlay(OverlayKind::Highlight, &format!("FrameStackHighlight{}", depth + 1), None);
                let color = colors[depth % colors.len()];
                host.set_overlay_color(frame, color);
                host.set_overlay_shown(frame, false);
                HighlightRegion { depth, frame, color, target: None, rect: None, shown: false }
            })
            .collect();
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[HighlightRegion] {
        &self.regions
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.regions.iter().map(|r| r.frame)
    }

    pub fn shown_count(&self) -> usize {
        self.regions.iter().filter(|r| r.shown).count()
    }

    pub fn hide_all<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        for region in &mut self.regions {
            host.set_overlay_shown(region.frame, false);
            region.shown = false;
        }
    }

    /// Place region *i* over `chain[i]` and show it; hide the rest.
    pub fn assign<H: FrameHost + ?Sized>(&mut self, host: &mut H, chain: &FrameChain) {
        for region in &mut self.regions {
            let target = chain
                .get(region.depth)
                .map(|e| e.frame)
                .filter(|&f| !host.is_overlay(f));
            let rect = target.and_then(|f| host.frame_rect(f));
            match (target, rect) {
                (Some(target), Some(rect)) => {
                    host.place_overlay(region.frame, rect);
                    region.target = Some(target);
                    region.rect = Some(rect);
                }
                _ => {
                    region.target = None;
                    region.rect = None;
                }
            }
        }
        self.reconcile_visibility(host, chain);
    }

    /// Show exactly the regions that cover a chain entry, without moving them.
    pub fn reconcile_visibility<H: FrameHost + ?Sized>(&mut self, host: &mut H, chain: &FrameChain) {
        for region in &mut self.regions {
            let wanted = region.depth < chain.len()
                && region.target.is_some()
                && region.target == chain.get(region.depth).map(|e| e.frame);
            host.set_overlay_shown(region.frame, wanted);
            region.shown = wanted;
        }
    }
}
