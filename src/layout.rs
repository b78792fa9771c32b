//! Layout computation for WoW frame positioning.
//!
//! Rects are in screen space: origin top-left, y grows downward. WoW anchor
//! offsets are y-up, so they are negated when applied.

use std::collections::HashMap;

use serde::Serialize;

use crate::widget::{AnchorPoint, Frame, WidgetRegistry};

/// Resolved frame rectangle in screen space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbouring rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// `(left, bottom)` in WoW client coordinates (origin bottom-left, y-up).
    pub fn wow_left_bottom(&self, screen_height: f32) -> (f32, f32) {
        (self.x, screen_height - self.bottom())
    }
}

/// Cached layout result: computed rect + effective scale.
#[derive(Clone, Copy, Debug)]
pub struct CachedFrameLayout {
    pub rect: LayoutRect,
    pub eff_scale: f32,
}

/// Memoization cache for frame layout computation.
///
/// Each frame is computed at most once per cache lifetime; siblings share
/// the cached parent result instead of redundantly walking the parent chain.
pub type LayoutCache = HashMap<u64, CachedFrameLayout>;

/// Resolved edge constraints from multiple anchors.
#[derive(Default)]
struct AnchorEdges {
    left_x: Option<f32>,
    right_x: Option<f32>,
    top_y: Option<f32>,
    bottom_y: Option<f32>,
    center_x: Option<f32>,
    center_y: Option<f32>,
}

struct LayoutCtx<'a> {
    registry: &'a WidgetRegistry,
    screen_width: f32,
    screen_height: f32,
}

impl LayoutCtx<'_> {
    fn screen_rect(&self) -> LayoutRect {
        LayoutRect::new(0.0, 0.0, self.screen_width, self.screen_height)
    }

    fn relative_rect(&self, rel_id: Option<u64>, parent_rect: LayoutRect, cache: &mut LayoutCache) -> LayoutRect {
        match rel_id {
            Some(id) => compute_cached(self, id, cache).rect,
            None => parent_rect,
        }
    }

    fn multi_anchor_edges(
        &self,
        frame: &Frame,
        parent_rect: LayoutRect,
        eff_scale: f32,
        cache: &mut LayoutCache,
    ) -> AnchorEdges {
        let mut edges = AnchorEdges::default();

        for anchor in &frame.anchors {
            let rel = self.relative_rect(anchor.relative_to_id, parent_rect, cache);
            let (anchor_x, anchor_y) = anchor_position(anchor.relative_point, rel.x, rel.y, rel.width, rel.height);
            let target_x = anchor_x + anchor.x_offset * eff_scale;
            let target_y = anchor_y - anchor.y_offset * eff_scale;

            match anchor.point {
                AnchorPoint::TopLeft     => { edges.left_x = Some(target_x); edges.top_y = Some(target_y); }
                AnchorPoint::TopRight    => { edges.right_x = Some(target_x); edges.top_y = Some(target_y); }
                AnchorPoint::BottomLeft  => { edges.left_x = Some(target_x); edges.bottom_y = Some(target_y); }
                AnchorPoint::BottomRight => { edges.right_x = Some(target_x); edges.bottom_y = Some(target_y); }
                AnchorPoint::Top         => { edges.top_y = Some(target_y); edges.center_x = Some(target_x); }
                AnchorPoint::Bottom      => { edges.bottom_y = Some(target_y); edges.center_x = Some(target_x); }
                AnchorPoint::Left        => { edges.left_x = Some(target_x); edges.center_y = Some(target_y); }
                AnchorPoint::Right       => { edges.right_x = Some(target_x); edges.center_y = Some(target_y); }
                AnchorPoint::Center      => { edges.center_x = Some(target_x); edges.center_y = Some(target_y); }
            }
        }

        edges
    }

    fn single_anchor(
        &self,
        frame: &Frame,
        parent_rect: LayoutRect,
        eff_scale: f32,
        cache: &mut LayoutCache,
    ) -> LayoutRect {
        let anchor = &frame.anchors[0];
        let width = frame.width * eff_scale;
        let height = frame.height * eff_scale;
        let rel = self.relative_rect(anchor.relative_to_id, parent_rect, cache);

        let (anchor_x, anchor_y) = anchor_position(anchor.relative_point, rel.x, rel.y, rel.width, rel.height);
        let target_x = anchor_x + anchor.x_offset * eff_scale;
        let target_y = anchor_y - anchor.y_offset * eff_scale;
        let (x, y) = frame_position_from_anchor(anchor.point, target_x, target_y, width, height);

        LayoutRect { x, y, width, height }
    }
}

/// Compute final rect from resolved edge constraints and frame size.
///
/// Anchors defining opposite edges override explicit size. Inverted bounds
/// are swapped to get positive dimensions.
fn rect_from_edges(edges: AnchorEdges, frame: &Frame, parent_rect: LayoutRect, scale: f32) -> LayoutRect {
    let (left_x, right_x) = match (edges.left_x, edges.right_x) {
        (Some(lx), Some(rx)) if lx > rx => (Some(rx), Some(lx)),
        other => other,
    };
    let (top_y, bottom_y) = match (edges.top_y, edges.bottom_y) {
        (Some(ty), Some(by)) if ty > by => (Some(by), Some(ty)),
        other => other,
    };

    let width = match (left_x, right_x) {
        (Some(lx), Some(rx)) => rx - lx,
        _ if frame.width > 0.0 => frame.width * scale,
        _ => 0.0,
    };
    let height = match (top_y, bottom_y) {
        (Some(ty), Some(by)) => by - ty,
        _ if frame.height > 0.0 => frame.height * scale,
        _ => 0.0,
    };

    // Horizontal position priority: left > right > center > parent center
    let x = left_x.unwrap_or_else(|| {
        right_x.map(|rx| rx - width).unwrap_or_else(|| {
            edges.center_x
                .map(|cx| cx - width / 2.0)
                .unwrap_or_else(|| parent_rect.x + (parent_rect.width - width) / 2.0)
        })
    });
    // Vertical position priority: top > bottom > center > parent center
    let y = top_y.unwrap_or_else(|| {
        bottom_y.map(|by| by - height).unwrap_or_else(|| {
            edges.center_y
                .map(|cy| cy - height / 2.0)
                .unwrap_or_else(|| parent_rect.y + (parent_rect.height - height) / 2.0)
        })
    });

    LayoutRect { x, y, width, height }
}

fn compute_cached(ctx: &LayoutCtx<'_>, id: u64, cache: &mut LayoutCache) -> CachedFrameLayout {
    if let Some(&cached) = cache.get(&id) {
        return cached;
    }

    let Some(frame) = ctx.registry.get(id) else {
        let result = CachedFrameLayout { rect: LayoutRect::default(), eff_scale: 1.0 };
        cache.insert(id, result);
        return result;
    };

    if ctx.registry.root_id() == Some(id) {
        let result = CachedFrameLayout { rect: ctx.screen_rect(), eff_scale: frame.scale };
        cache.insert(id, result);
        return result;
    }

    // Placeholder breaks parent or anchor cycles: a frame that depends on
    // itself sees an empty rect instead of recursing forever.
    cache.insert(id, CachedFrameLayout { rect: LayoutRect::default(), eff_scale: 1.0 });

    let parent_rect = match frame.parent_id {
        Some(pid) => compute_cached(ctx, pid, cache).rect,
        None => ctx.screen_rect(),
    };
    let scale = ctx.registry.effective_scale(id);

    let rect = if frame.anchors.is_empty() {
        LayoutRect { x: parent_rect.x, y: parent_rect.y, width: frame.width * scale, height: frame.height * scale }
    } else if frame.anchors.len() >= 2 {
        let edges = ctx.multi_anchor_edges(frame, parent_rect, scale, cache);
        rect_from_edges(edges, frame, parent_rect, scale)
    } else {
        ctx.single_anchor(frame, parent_rect, scale, cache)
    };

    let result = CachedFrameLayout { rect, eff_scale: scale };
    cache.insert(id, result);
    result
}

/// Compute frame rect with memoization. Each frame is computed at most once
/// per cache lifetime; parent results are reused by siblings.
pub fn compute_frame_rect_cached(
    registry: &WidgetRegistry,
    id: u64,
    screen_width: f32,
    screen_height: f32,
    cache: &mut LayoutCache,
) -> CachedFrameLayout {
    let ctx = LayoutCtx { registry, screen_width, screen_height };
    compute_cached(&ctx, id, cache)
}

/// Compute frame rect with anchor resolution (uncached).
pub fn compute_frame_rect(registry: &WidgetRegistry, id: u64, screen_width: f32, screen_height: f32) -> LayoutRect {
    let mut cache = LayoutCache::new();
    compute_frame_rect_cached(registry, id, screen_width, screen_height, &mut cache).rect
}

/// Get the position of an anchor point on a rectangle.
pub fn anchor_position(point: AnchorPoint, x: f32, y: f32, w: f32, h: f32) -> (f32, f32) {
    match point {
        AnchorPoint::TopLeft => (x, y),
        AnchorPoint::Top => (x + w / 2.0, y),
        AnchorPoint::TopRight => (x + w, y),
        AnchorPoint::Left => (x, y + h / 2.0),
        AnchorPoint::Center => (x + w / 2.0, y + h / 2.0),
        AnchorPoint::Right => (x + w, y + h / 2.0),
        AnchorPoint::BottomLeft => (x, y + h),
        AnchorPoint::Bottom => (x + w / 2.0, y + h),
        AnchorPoint::BottomRight => (x + w, y + h),
    }
}

/// Calculate frame position given its anchor point and target position.
pub fn frame_position_from_anchor(point: AnchorPoint, anchor_x: f32, anchor_y: f32, w: f32, h: f32) -> (f32, f32) {
    match point {
        AnchorPoint::TopLeft => (anchor_x, anchor_y),
        AnchorPoint::Top => (anchor_x - w / 2.0, anchor_y),
        AnchorPoint::TopRight => (anchor_x - w, anchor_y),
        AnchorPoint::Left => (anchor_x, anchor_y - h / 2.0),
        AnchorPoint::Center => (anchor_x - w / 2.0, anchor_y - h / 2.0),
        AnchorPoint::Right => (anchor_x - w, anchor_y - h / 2.0),
        AnchorPoint::BottomLeft => (anchor_x, anchor_y - h),
        AnchorPoint::Bottom => (anchor_x - w / 2.0, anchor_y - h),
        AnchorPoint::BottomRight => (anchor_x - w, anchor_y - h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Anchor, WidgetType};

    fn anchor(point: AnchorPoint, rel_id: Option<u64>, rel_point: AnchorPoint) -> Anchor {
        Anchor { point, relative_to_id: rel_id, relative_point: rel_point, x_offset: 0.0, y_offset: 0.0 }
    }

    fn make_frame(parent: Option<u64>, w: f32, h: f32, anchors: Vec<Anchor>) -> Frame {
        let mut f = Frame::new(WidgetType::Frame, None, parent);
        f.width = w;
        f.height = h;
        f.anchors = anchors;
        f
    }

    fn register(reg: &mut WidgetRegistry, frame: Frame) -> u64 {
        let parent = frame.parent_id;
        let id = reg.register(frame);
        if let Some(pid) = parent {
            reg.add_child(pid, id);
        }
        id
    }

    /// UIParent → button → Left, Right, Center (three-slice).
    fn build_three_slice_registry() -> (WidgetRegistry, u64) {
        let mut reg = WidgetRegistry::new();
        let uip = register(&mut reg, make_frame(None, 1024.0, 768.0, vec![]));
        reg.set_root(uip);
        let btn = register(&mut reg, make_frame(Some(uip), 200.0, 36.0,
            vec![anchor(AnchorPoint::Center, None, AnchorPoint::Center)]));
        let left = register(&mut reg, make_frame(Some(btn), 32.0, 39.0,
            vec![anchor(AnchorPoint::Left, None, AnchorPoint::Left)]));
        let right = register(&mut reg, make_frame(Some(btn), 32.0, 39.0,
            vec![anchor(AnchorPoint::Right, None, AnchorPoint::Right)]));
        let center = register(&mut reg, make_frame(Some(btn), 0.0, 0.0, vec![
            anchor(AnchorPoint::TopLeft, Some(left), AnchorPoint::TopRight),
            anchor(AnchorPoint::BottomRight, Some(right), AnchorPoint::BottomLeft),
        ]));
        (reg, center)
    }

    #[test]
    fn cross_frame_anchor_center_texture() {
        let (registry, center) = build_three_slice_registry();
        let rect = compute_frame_rect(&registry, center, 1024.0, 768.0);
        // 200 - 32 - 32
        assert!((rect.width - 136.0).abs() < 0.01, "got {}", rect.width);
        assert!((rect.height - 39.0).abs() < 0.01, "got {}", rect.height);
    }

    #[test]
    fn offsets_are_y_up() {
        let mut reg = WidgetRegistry::new();
        let root = register(&mut reg, make_frame(None, 0.0, 0.0, vec![]));
        reg.set_root(root);
        let f = register(&mut reg, make_frame(Some(root), 100.0, 50.0, vec![Anchor {
            x_offset: 10.0,
            y_offset: -20.0,
            ..Anchor::to_parent(AnchorPoint::TopLeft)
        }]));
        let rect = compute_frame_rect(&reg, f, 800.0, 600.0);
        assert_eq!(rect, LayoutRect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(rect.wow_left_bottom(600.0), (10.0, 530.0));
    }

    #[test]
    fn scale_applies_to_size_and_offsets() {
        let mut reg = WidgetRegistry::new();
        let root = register(&mut reg, make_frame(None, 0.0, 0.0, vec![]));
        reg.set_root(root);
        let mut frame = make_frame(Some(root), 100.0, 50.0, vec![Anchor {
            x_offset: 10.0,
            ..Anchor::to_parent(AnchorPoint::TopLeft)
        }]);
        frame.scale = 2.0;
        let f = register(&mut reg, frame);
        let rect = compute_frame_rect(&reg, f, 800.0, 600.0);
        assert_eq!(rect, LayoutRect::new(20.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn self_parent_does_not_recurse() {
        let mut reg = WidgetRegistry::new();
        let f = register(&mut reg, make_frame(None, 40.0, 40.0, vec![anchor(AnchorPoint::Center, None, AnchorPoint::Center)]));
        reg.get_mut(f).unwrap().parent_id = Some(f);
        let rect = compute_frame_rect(&reg, f, 800.0, 600.0);
        assert_eq!(rect.width, 40.0);
    }

    #[test]
    fn half_open_containment() {
        let r = LayoutRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
    }
}
