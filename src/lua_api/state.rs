//! Shared simulator state accessible from Lua.

use std::collections::BTreeSet;

use crate::widget::{Frame, WidgetRegistry, WidgetType};

/// Everything Lua-visible that outlives a single call.
#[derive(Debug)]
pub struct SimState {
    pub widgets: WidgetRegistry,
    /// Console output from Lua print() calls.
    pub console_output: Vec<String>,
    /// Frame IDs with an OnUpdate script handler.
    pub on_update_frames: BTreeSet<u64>,
    /// Screen dimensions in UI coordinates.
    pub screen_width: f32,
    pub screen_height: f32,
    /// Cursor in screen space (origin top-left, y down).
    pub cursor: (f32, f32),
    /// Whether the client's frame stack hit test is loaded.
    pub hit_test_available: bool,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

impl SimState {
    /// Fresh state holding only `UIParent`, sized to the screen.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let mut widgets = WidgetRegistry::new();
        let mut ui_parent = Frame::new(WidgetType::Frame, Some("UIParent".to_string()), None);
        ui_parent.set_size(screen_width, screen_height);
        let root = widgets.register(ui_parent);
        widgets.set_root(root);

        Self {
            widgets,
            console_output: Vec::new(),
            on_update_frames: BTreeSet::new(),
            screen_width,
            screen_height,
            cursor: (0.0, 0.0),
            hit_test_available: true,
        }
    }

    pub fn ui_parent_id(&self) -> Option<u64> {
        self.widgets.root_id()
    }

    /// Cursor in WoW client coordinates (origin bottom-left, y up).
    pub fn cursor_wow(&self) -> (f32, f32) {
        (self.cursor.0, self.screen_height - self.cursor.1)
    }

    pub fn set_cursor_wow(&mut self, x: f32, y: f32) {
        self.cursor = (x, self.screen_height - y);
    }

    /// Create a widget and link it under `parent_id`, inheriting strata and
    /// level the way `CreateFrame` does.
    pub fn create_widget(&mut self, widget_type: WidgetType, name: Option<String>, parent_id: Option<u64>) -> u64 {
        let mut frame = Frame::new(widget_type, name, parent_id);
        if let Some(parent) = parent_id.and_then(|pid| self.widgets.get(pid)) {
            frame.frame_strata = parent.frame_strata;
            frame.frame_level = parent.frame_level + 1;
        }
        let id = self.widgets.register(frame);
        if let Some(pid) = parent_id {
            self.widgets.add_child(pid, id);
        }
        id
    }
}
