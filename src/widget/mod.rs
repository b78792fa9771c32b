//! Widget system implementing WoW's UI object hierarchy.

mod anchor;
mod frame;
mod registry;

pub use anchor::{Anchor, AnchorPoint};
pub use frame::{Color, Frame, FrameStrata};
pub use registry::WidgetRegistry;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique widget ID.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Widget types supported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    Frame,
    Button,
    CheckButton,
    EditBox,
    ScrollFrame,
    Slider,
    StatusBar,
    GameTooltip,
    Texture,
    FontString,
}

impl WidgetType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        // WoW Lua uses both PascalCase ("Button") and ALLCAPS ("BUTTON")
        // for frame type names, so match case-insensitively.
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "frame" => Some(Self::Frame),
            "button" | "dropdownbutton" | "itembutton" => Some(Self::Button),
            "checkbutton" => Some(Self::CheckButton),
            "editbox" => Some(Self::EditBox),
            "scrollframe" => Some(Self::ScrollFrame),
            "slider" => Some(Self::Slider),
            "statusbar" => Some(Self::StatusBar),
            "gametooltip" => Some(Self::GameTooltip),
            "texture" => Some(Self::Texture),
            "fontstring" => Some(Self::FontString),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "Frame",
            Self::Button => "Button",
            Self::CheckButton => "CheckButton",
            Self::EditBox => "EditBox",
            Self::ScrollFrame => "ScrollFrame",
            Self::Slider => "Slider",
            Self::StatusBar => "StatusBar",
            Self::GameTooltip => "GameTooltip",
            Self::Texture => "Texture",
            Self::FontString => "FontString",
        }
    }

    pub fn is_region(&self) -> bool {
        matches!(self, Self::Texture | Self::FontString)
    }
}
