//! Floating details panel describing the topmost stack entry.

use serde::Serialize;

use super::format::{format_details, visible_len};
use super::host::{FrameDetails, FrameHost, FrameId, OverlayKind};
use crate::layout::LayoutRect;

const LINE_HEIGHT: f32 = 14.0;
const CHAR_WIDTH: f32 = 7.0;
const PADDING: f32 = 8.0;
const MIN_WIDTH: f32 = 120.0;

/// What the panel currently displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelContents {
    pub frame: FrameId,
    pub details: FrameDetails,
    pub lines: Vec<String>,
    pub rect: LayoutRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    frame: FrameId,
    text: FrameId,
    offset: f32,
    contents: Option<PanelContents>,
    shown: bool,
}

impl DetailsPanel {
    pub fn new<H: FrameHost + ?Sized>(host: &mut H, offset: f32) -> Self {
        let frame = host.create_overlay(OverlayKind::Panel, "FrameStackInspectorPanel", None);
        let text = host.create_overlay(OverlayKind::PanelText, "FrameStackInspectorPanelText", Some(frame));
        host.set_overlay_shown(frame, false);
        Self { frame, text, offset, contents: None, shown: false }
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn text_frame(&self) -> FrameId {
        self.text
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn contents(&self) -> Option<&PanelContents> {
        self.contents.as_ref()
    }

    /// Describe `target` and move the panel next to the cursor.
    pub fn refresh<H: FrameHost + ?Sized>(&mut self, host: &mut H, target: FrameId, cursor: (f32, f32)) {
        let details = host.frame_details(target);
        let lines = format_details(&details);
        let size = panel_size(&lines);
        let rect = place_panel(cursor, size, host.screen_size(), self.offset);

        host.set_overlay_text(self.text, &lines.join("\n"));
        host.place_overlay(self.frame, rect);
        host.place_overlay(self.text, inset(rect, PADDING));
        host.set_overlay_shown(self.frame, true);
        self.shown = true;
        self.contents = Some(PanelContents { frame: target, details, lines, rect });
    }

    pub fn hide<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        host.set_overlay_shown(self.frame, false);
        self.shown = false;
        self.contents = None;
    }
}

/// Panel size needed to show `lines`, ignoring color escapes.
pub fn panel_size(lines: &[String]) -> (f32, f32) {
    let longest = lines.iter().map(|l| visible_len(l)).max().unwrap_or(0);
    let width = (longest as f32 * CHAR_WIDTH + 2.0 * PADDING).max(MIN_WIDTH);
    let height = lines.len() as f32 * LINE_HEIGHT + 2.0 * PADDING;
    (width, height)
}

/// Put the panel below-right of the cursor, flipping to the other side of
/// the cursor on each axis where it would leave the screen.
pub fn place_panel(cursor: (f32, f32), size: (f32, f32), screen: (f32, f32), offset: f32) -> LayoutRect {
    let (cx, cy) = cursor;
    let (w, h) = size;
    let (sw, sh) = screen;

    let mut x = cx + offset;
    if x + w > sw {
        x = cx - offset - w;
    }
    let mut y = cy + offset;
    if y + h > sh {
        y = cy - offset - h;
    }

    LayoutRect::new(x.clamp(0.0, (sw - w).max(0.0)), y.clamp(0.0, (sh - h).max(0.0)), w, h)
}

fn inset(rect: LayoutRect, by: f32) -> LayoutRect {
    LayoutRect::new(
        rect.x + by,
        rect.y + by,
        (rect.width - 2.0 * by).max(0.0),
        (rect.height - 2.0 * by).max(0.0),
    )
}
