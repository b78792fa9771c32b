//! Frame widget - the base container for UI elements.

use super::{next_widget_id, Anchor, WidgetType};
use serde::{Deserialize, Serialize};

/// RGBA color value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `RRGGBB` hex digits as used in WoW `|cff` color escapes.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

/// A Frame is the base widget type in WoW's UI system.
///
/// Regions (textures and font strings) share this struct; their
/// `widget_type` tells them apart.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Unique widget ID.
    pub id: u64,
    /// Widget type.
    pub widget_type: WidgetType,
    /// Global name (optional).
    pub name: Option<String>,
    /// Parent widget ID.
    pub parent_id: Option<u64>,
    /// Child widget IDs (frames and regions, in creation order).
    pub children: Vec<u64>,
    /// Width in UI units (before scale).
    pub width: f32,
    /// Height in UI units (before scale).
    pub height: f32,
    /// Anchors defining position.
    pub anchors: Vec<Anchor>,
    /// Whether the frame itself is shown (ancestors may still hide it).
    pub visible: bool,
    /// Frame level (draw order within strata).
    pub frame_level: i32,
    /// Frame strata (major draw order).
    pub frame_strata: FrameStrata,
    /// Strata was set explicitly and is not inherited on reparent.
    pub has_fixed_frame_strata: bool,
    /// Level was set explicitly and is not inherited on reparent.
    pub has_fixed_frame_level: bool,
    /// Alpha transparency (0.0 - 1.0).
    pub alpha: f32,
    /// Scale relative to the parent.
    pub scale: f32,
    /// Whether mouse is enabled.
    pub mouse_enabled: bool,
    /// Texture path (for Texture widgets).
    pub texture: Option<String>,
    /// Solid color set with SetColorTexture / vertex tint.
    pub vertex_color: Option<Color>,
    /// Text content (for FontString widgets).
    pub text: Option<String>,
    /// Created by the frame stack inspector itself.
    pub is_overlay: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(WidgetType::Frame, None, None)
    }
}

impl Frame {
    pub fn new(widget_type: WidgetType, name: Option<String>, parent_id: Option<u64>) -> Self {
        Self {
            id: next_widget_id(),
            widget_type,
            name,
            parent_id,
            children: Vec::new(),
            width: 0.0,
            height: 0.0,
            anchors: Vec::new(),
            visible: true,
            frame_level: 0,
            frame_strata: FrameStrata::Medium,
            has_fixed_frame_strata: false,
            has_fixed_frame_level: false,
            alpha: 1.0,
            scale: 1.0,
            mouse_enabled: false,
            texture: None,
            vertex_color: None,
            text: None,
            is_overlay: false,
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Add an anchor, replacing any existing anchor on the same point.
    pub fn set_point(&mut self, anchor: Anchor) {
        self.anchors.retain(|a| a.point != anchor.point);
        self.anchors.push(anchor);
    }

    pub fn clear_all_points(&mut self) {
        self.anchors.clear();
    }

    /// Textures and font strings are regions, not frames.
    pub fn is_region(&self) -> bool {
        self.widget_type.is_region()
    }
}

/// Frame strata (draw order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FrameStrata {
    World,
    Background,
    Low,
    #[default]
    Medium,
    High,
    Dialog,
    Fullscreen,
    FullscreenDialog,
    Tooltip,
}

impl FrameStrata {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "WORLD" => Some(Self::World),
            "BACKGROUND" => Some(Self::Background),
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "DIALOG" => Some(Self::Dialog),
            "FULLSCREEN" => Some(Self::Fullscreen),
            "FULLSCREEN_DIALOG" => Some(Self::FullscreenDialog),
            "TOOLTIP" => Some(Self::Tooltip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::World => "WORLD",
            Self::Background => "BACKGROUND",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Dialog => "DIALOG",
            Self::Fullscreen => "FULLSCREEN",
            Self::FullscreenDialog => "FULLSCREEN_DIALOG",
            Self::Tooltip => "TOOLTIP",
        }
    }
}
