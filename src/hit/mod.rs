//! Hit testing: which frames lie under a screen point.

mod grid;

pub use grid::HitGrid;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::layout::{compute_frame_rect_cached, LayoutCache, LayoutRect};
use crate::widget::WidgetRegistry;

/// Flags mirroring the client's `SetFrameStack(showHidden, showRegions)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitTestOptions {
    /// Include frames that are not effectively visible.
    #[serde(default)]
    pub show_hidden: bool,
    /// Include textures and font strings, not only frames.
    #[serde(default)]
    pub show_regions: bool,
}

/// Collect hittable frames with computed rects, sorted by strata/level
/// (lowest first, so the last entry is drawn on top).
///
/// The root frame is never hittable: the cursor over nothing but the root
/// counts as empty space. Overlay frames are never hittable, shown or not,
/// so the inspector's own panel cannot cover what it inspects.
pub fn collect_hittable(
    registry: &WidgetRegistry,
    screen_width: f32,
    screen_height: f32,
    options: HitTestOptions,
) -> Vec<(u64, LayoutRect)> {
    let mut cache = LayoutCache::new();
    let root = registry.root_id();

    let mut frames: Vec<_> = registry
        .all_ids()
        .into_iter()
        .filter(|&id| Some(id) != root)
        .filter_map(|id| {
            let f = registry.get(id)?;
            if f.is_region() && !options.show_regions {
                return None;
            }
            if f.is_overlay || (!options.show_hidden && !registry.is_visible(id)) {
                return None;
            }
            let rect = compute_frame_rect_cached(registry, id, screen_width, screen_height, &mut cache).rect;
            if rect.is_empty() {
                return None;
            }
            Some((id, rect))
        })
        .collect();

    frames.sort_by(|a, b| draw_order(registry, a.0, b.0));
    frames
}

/// Strata, then level, then frames below their regions, then creation order.
fn draw_order(registry: &WidgetRegistry, a: u64, b: u64) -> Ordering {
    let (Some(fa), Some(fb)) = (registry.get(a), registry.get(b)) else {
        return a.cmp(&b);
    };
    fa.frame_strata
        .cmp(&fb.frame_strata)
        .then_with(|| fa.frame_level.cmp(&fb.frame_level))
        .then_with(|| fa.is_region().cmp(&fb.is_region()))
        .then_with(|| a.cmp(&b))
}

/// Build a hit grid for the current registry state.
pub fn build_hit_grid(
    registry: &WidgetRegistry,
    screen_width: f32,
    screen_height: f32,
    options: HitTestOptions,
) -> HitGrid {
    let hittable = collect_hittable(registry, screen_width, screen_height, options);
    HitGrid::new(&hittable, screen_width, screen_height)
}
