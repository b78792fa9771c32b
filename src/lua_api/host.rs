//! The simulator as a [`FrameHost`] for the frame stack inspector.

use crate::hit::{build_hit_grid, HitTestOptions};
use crate::inspector::{AnchorInfo, FrameDetails, FrameHost, FrameId, HitTest, OverlayKind, ANONYMOUS};
use crate::layout::{compute_frame_rect, LayoutRect};
use crate::widget::{Anchor, AnchorPoint, Color, Frame, FrameStrata, WidgetType};

use super::SimState;

impl SimState {
    fn display_name(&self, id: u64) -> String {
        self.widgets
            .get(id)
            .and_then(|f| f.name.clone())
            .unwrap_or_else(|| ANONYMOUS.to_string())
    }

    fn anchor_info(&self, anchor: &Anchor) -> AnchorInfo {
        AnchorInfo {
            point: anchor.point.as_str().to_string(),
            relative_to: anchor.relative_to_id.map(|id| self.display_name(id)),
            relative_point: anchor.relative_point.as_str().to_string(),
            x: anchor.x_offset,
            y: anchor.y_offset,
        }
    }

    fn texture_lines(&self, frame: &Frame) -> Vec<String> {
        std::iter::once(frame)
            .chain(frame.children.iter().filter_map(|&cid| self.widgets.get(cid)))
            .filter(|f| f.widget_type == WidgetType::Texture)
            .filter_map(|f| match (&f.texture, f.vertex_color) {
                (Some(path), _) => Some(path.clone()),
                (None, Some(color)) => Some(format!("solid #{}", color.to_hex())),
                (None, None) => None,
            })
            .collect()
    }
}

impl FrameHost for SimState {
    fn hit_test(&self, x: f32, y: f32, options: HitTestOptions) -> HitTest {
        if !self.hit_test_available {
            return HitTest::Unavailable;
        }
        let grid = build_hit_grid(&self.widgets, self.screen_width, self.screen_height, options);
        match grid.topmost_at(x, y) {
            Some(id) => HitTest::Hit(id),
            None => HitTest::Miss,
        }
    }

    fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.widgets.get(id).and_then(|f| f.parent_id)
    }

    fn is_root(&self, id: FrameId) -> bool {
        self.widgets.root_id() == Some(id)
    }

    fn is_overlay(&self, id: FrameId) -> bool {
        self.widgets.get(id).is_some_and(|f| f.is_overlay)
    }

    fn frame_rect(&self, id: FrameId) -> Option<LayoutRect> {
        self.widgets.get(id)?;
        Some(compute_frame_rect(&self.widgets, id, self.screen_width, self.screen_height))
    }

    fn frame_details(&self, id: FrameId) -> FrameDetails {
        let Some(frame) = self.widgets.get(id) else {
            return FrameDetails::default();
        };
        let rect = compute_frame_rect(&self.widgets, id, self.screen_width, self.screen_height);
        let scale = self.widgets.effective_scale(id).max(f32::EPSILON);
        let (left, bottom) = rect.wow_left_bottom(self.screen_height);
        let (regions, frames): (Vec<_>, Vec<_>) = frame
            .children
            .iter()
            .filter_map(|&cid| self.widgets.get(cid))
            .partition(|c| c.is_region());

        FrameDetails {
            name: frame.name.clone(),
            object_type: Some(frame.widget_type.as_str().to_string()),
            width: Some(rect.width / scale),
            height: Some(rect.height / scale),
            left: Some(left / scale),
            bottom: Some(bottom / scale),
            strata: Some(frame.frame_strata.as_str().to_string()),
            level: Some(frame.frame_level),
            shown: Some(frame.visible),
            visible: Some(self.widgets.is_visible(id)),
            alpha: Some(frame.alpha),
            scale: Some(frame.scale),
            mouse_enabled: Some(frame.mouse_enabled),
            num_children: Some(frames.len()),
            num_regions: Some(regions.len()),
            anchors: Some(frame.anchors.iter().map(|a| self.anchor_info(a)).collect()),
            textures: Some(self.texture_lines(frame)),
            parent_chain: Some(
                self.widgets
                    .ancestors(id)
                    .into_iter()
                    .map(|pid| self.widgets.get(pid).and_then(|p| p.name.clone()))
                    .collect(),
            ),
        }
    }

    fn screen_size(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }

    fn create_overlay(&mut self, kind: OverlayKind, name: &str, parent: Option<FrameId>) -> FrameId {
        let parent = parent.or(self.widgets.root_id());
        let widget_type = match kind {
            OverlayKind::Highlight | OverlayKind::Panel => WidgetType::Frame,
            OverlayKind::PanelText => WidgetType::FontString,
        };
        let id = self.create_widget(widget_type, Some(name.to_string()), parent);
        if let Some(frame) = self.widgets.get_mut(id) {
            frame.is_overlay = true;
            frame.visible = false;
            frame.frame_strata = FrameStrata::Tooltip;
            frame.has_fixed_frame_strata = true;
            if kind == OverlayKind::Panel {
                frame.vertex_color = Some(Color::new(0.0, 0.0, 0.0, 0.85));
            }
        }
        id
    }

    fn place_overlay(&mut self, id: FrameId, rect: LayoutRect) {
        let root = self.widgets.root_id();
        let scale = self.widgets.effective_scale(id).max(f32::EPSILON);
        if let Some(frame) = self.widgets.get_mut(id) {
            frame.clear_all_points();
            frame.set_point(Anchor {
                point: AnchorPoint::TopLeft,
                relative_to_id: root,
                relative_point: AnchorPoint::TopLeft,
                x_offset: rect.x / scale,
                y_offset: -rect.y / scale,
            });
            frame.set_size(rect.width / scale, rect.height / scale);
        }
    }

    fn set_overlay_shown(&mut self, id: FrameId, shown: bool) {
        if let Some(frame) = self.widgets.get_mut(id) {
            frame.visible = shown;
        }
    }

    fn set_overlay_color(&mut self, id: FrameId, color: Color) {
        if let Some(frame) = self.widgets.get_mut(id) {
            frame.vertex_color = Some(color);
        }
    }

    fn set_overlay_text(&mut self, id: FrameId, text: &str) {
        if let Some(frame) = self.widgets.get_mut(id) {
            frame.text = Some(text.to_string());
        }
    }

    fn is_overlay_shown(&self, id: FrameId) -> bool {
        self.widgets.get(id).is_some_and(|f| f.visible)
    }
}
