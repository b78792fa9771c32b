//! The boundary between the inspector and the UI toolkit it inspects.

use serde::Serialize;

use crate::hit::HitTestOptions;
use crate::layout::LayoutRect;
use crate::widget::Color;

/// Opaque handle to a host frame. Equality is identity.
pub type FrameId = u64;

/// Result of asking the host what lies under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTest {
    /// The hit-test facility is not loaded.
    Unavailable,
    /// Nothing but the root under the point.
    Miss,
    Hit(FrameId),
}

/// Kinds of frames the inspector creates for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Solid colored rectangle covering one stack entry.
    Highlight,
    /// Details panel background.
    Panel,
    /// Text line block inside the details panel.
    PanelText,
}

/// One anchor of an inspected frame, resolved to names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorInfo {
    pub point: String,
    pub relative_to: Option<String>,
    pub relative_point: String,
    pub x: f32,
    pub y: f32,
}

/// Attribute bag describing one frame. Every attribute may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameDetails {
    pub name: Option<String>,
    pub object_type: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Distance from the left screen edge.
    pub left: Option<f32>,
    /// Distance from the bottom screen edge.
    pub bottom: Option<f32>,
    pub strata: Option<String>,
    pub level: Option<i32>,
    /// The frame's own shown flag.
    pub shown: Option<bool>,
    /// Shown, and every ancestor shown.
    pub visible: Option<bool>,
    pub alpha: Option<f32>,
    pub scale: Option<f32>,
    pub mouse_enabled: Option<bool>,
    pub num_children: Option<usize>,
    pub num_regions: Option<usize>,
    pub anchors: Option<Vec<AnchorInfo>>,
    pub textures: Option<Vec<String>>,
    /// Ancestor names from the direct parent up to the root.
    pub parent_chain: Option<Vec<Option<String>>>,
}

/// Queries the inspector needs from the UI toolkit, plus the handful of
/// mutations it performs on frames it created itself.
pub trait FrameHost {
    fn hit_test(&self, x: f32, y: f32, options: HitTestOptions) -> HitTest;
    fn parent(&self, id: FrameId) -> Option<FrameId>;
    fn is_root(&self, id: FrameId) -> bool;
    fn is_overlay(&self, id: FrameId) -> bool;
    fn frame_rect(&self, id: FrameId) -> Option<LayoutRect>;
    fn frame_details(&self, id: FrameId) -> FrameDetails;
    fn screen_size(&self) -> (f32, f32);

    /// Create a hidden overlay frame. `parent` of None means the root.
    fn create_overlay(&mut self, kind: OverlayKind, name: &str, parent: Option<FrameId>) -> FrameId;
    /// Position an overlay frame to exactly cover `rect` (screen space).
    fn place_overlay(&mut self, id: FrameId, rect: LayoutRect);
    fn set_overlay_shown(&mut self, id: FrameId, shown: bool);
    fn set_overlay_color(&mut self, id: FrameId, color: Color);
    fn set_overlay_text(&mut self, id: FrameId, text: &str);
    fn is_overlay_shown(&self, id: FrameId) -> bool;
}
