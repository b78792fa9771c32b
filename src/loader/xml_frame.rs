//! Frame creation from XML definitions.

use crate::xml::FrameXml;

use super::helpers::{escape_lua_string, generate_anchors_code, generate_size_code, lua_string_or_nil, ParentRef};
use super::xml_region::append_layers_code;

/// Builds one Lua chunk for a top-level frame and everything nested in it.
///
/// Each object lives in its own local (`f1`, `f2`, ...) inside a `do`
/// block, so anonymous parents can still be referenced by their children.
#[derive(Debug, Default)]
pub struct FrameCodegen {
    code: String,
    next_var: usize,
}

impl FrameCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.code
    }

    /// Fresh local variable name.
    pub(super) fn var(&mut self, prefix: &str) -> String {
        self.next_var += 1;
        format!("{prefix}{}", self.next_var)
    }

    pub(super) fn push(&mut self, line: &str) {
        self.code.push_str(line);
    }

    /// Emit code creating `frame` of `widget_type` under `parent`.
    pub fn append_frame(&mut self, frame: &FrameXml, widget_type: &str, parent: &ParentRef<'_>) {
        let var = self.var("f");
        let name = frame.name.as_deref().map(|n| parent.substitute(n));

        self.push("do\n");
        self.push(&format!(
            "local {var} = CreateFrame(\"{widget_type}\", {}, {})\n",
            lua_string_or_nil(name.as_deref()),
            parent.var
        ));

        if let Some(strata) = &frame.frame_strata {
            self.push(&format!("{var}:SetFrameStrata(\"{}\")\n", escape_lua_string(strata)));
        }
        if let Some(level) = frame.frame_level {
            self.push(&format!("{var}:SetFrameLevel({level})\n"));
        }
        if let Some(enabled) = frame.enable_mouse {
            self.push(&format!("{var}:EnableMouse({enabled})\n"));
        }
        if let Some(size) = frame.size() {
            self.push(&generate_size_code(&var, size));
        }
        if frame.set_all_points == Some(true) {
            self.push(&format!("{var}:SetAllPoints()\n"));
        }
        if let Some(anchors) = frame.anchors() {
            self.push(&generate_anchors_code(&var, anchors, parent));
        }
        if frame.hidden == Some(true) {
            self.push(&format!("{var}:Hide()\n"));
        }

        let this = ParentRef { var: &var, name: name.as_deref() };
        for layers in frame.layers() {
            append_layers_code(self, layers, &this);
        }
        for frames in frame.frames() {
            for child in &frames.elements {
                if let Some((child_type, child)) = child.as_frame() {
                    self.append_frame(child, child_type, &this);
                }
            }
        }

        self.push("end\n");
    }
}
