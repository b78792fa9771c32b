//! Frame tree dump with absolute screen coordinates and warning flags.

use crate::layout::compute_frame_rect;
use crate::widget::{Frame, WidgetRegistry};
use crate::LayoutRect;

/// Which frames a dump includes.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions<'a> {
    /// Case-insensitive substring a frame's display name must contain.
    /// Ancestors of matching frames are kept so the tree stays connected.
    pub filter: Option<&'a str>,
    /// Skip hidden frames and their subtrees.
    pub visible_only: bool,
    /// Include the inspector's own overlay frames.
    pub include_overlays: bool,
}

/// Build a frame tree dump, one line per frame:
/// `name [Type] (x,y WxH)` plus ` ! FLAG, FLAG` when something looks off.
pub fn build_frame_tree_dump(
    registry: &WidgetRegistry,
    screen_width: f32,
    screen_height: f32,
    options: &DumpOptions<'_>,
) -> String {
    let mut root_ids: Vec<u64> = registry
        .all_ids()
        .into_iter()
        .filter(|&id| registry.get(id).is_some_and(|f| f.parent_id.is_none()))
        .collect();
    root_ids.sort_unstable();

    let mut lines = Vec::new();
    for id in root_ids {
        dump_frame_recursive(registry, id, 0, screen_width, screen_height, options, &mut lines);
    }

    if lines.is_empty() {
        "No frames found".to_string()
    } else {
        lines.join("\n")
    }
}

fn dump_frame_recursive(
    registry: &WidgetRegistry,
    id: u64,
    depth: usize,
    screen_width: f32,
    screen_height: f32,
    options: &DumpOptions<'_>,
    lines: &mut Vec<String>,
) {
    if !subtree_matches(registry, id, options) {
        return;
    }
    let Some(frame) = registry.get(id) else {
        return;
    };

    let rect = compute_frame_rect(registry, id, screen_width, screen_height);
    let warnings = warning_flags(frame, &rect, screen_width, screen_height);
    let warning_str = if warnings.is_empty() {
        String::new()
    } else {
        format!(" ! {}", warnings.join(", "))
    };

    lines.push(format!(
        "{}{} [{}] ({:.0},{:.0} {}x{}){warning_str}",
        "  ".repeat(depth),
        display_name(frame),
        frame.widget_type.as_str(),
        rect.x,
        rect.y,
        rect.width as i32,
        rect.height as i32,
    ));

    for &child_id in &frame.children {
        dump_frame_recursive(registry, child_id, depth + 1, screen_width, screen_height, options, lines);
    }
}

/// Warning flags for a frame's computed rect.
pub fn warning_flags(frame: &Frame, rect: &LayoutRect, screen_width: f32, screen_height: f32) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if rect.width <= 0.0 {
        warnings.push("ZERO_WIDTH");
    }
    if rect.height <= 0.0 {
        warnings.push("ZERO_HEIGHT");
    }
    if rect.x + rect.width < 0.0 || rect.x > screen_width {
        warnings.push("OFFSCREEN_X");
    }
    if rect.y + rect.height < 0.0 || rect.y > screen_height {
        warnings.push("OFFSCREEN_Y");
    }
    if !frame.visible {
        warnings.push("HIDDEN");
    }
    warnings
}

/// Whether `id` or anything below it passes the dump filters.
fn subtree_matches(registry: &WidgetRegistry, id: u64, options: &DumpOptions<'_>) -> bool {
    let Some(frame) = registry.get(id) else {
        return false;
    };
    if options.visible_only && !frame.visible {
        return false;
    }
    if frame.is_overlay && !options.include_overlays {
        return false;
    }
    let matches = options
        .filter
        .map(|f| display_name(frame).to_lowercase().contains(&f.to_lowercase()))
        .unwrap_or(true);
    matches || frame.children.iter().any(|&child| subtree_matches(registry, child, options))
}

/// Global name, or the quoted text of an anonymous font string, or `(anon)`.
fn display_name(frame: &Frame) -> String {
    if let Some(name) = &frame.name {
        return name.clone();
    }
    match frame.text.as_deref().filter(|t| !t.is_empty()) {
        Some(text) if text.chars().count() > 20 => {
            format!("\"{}...\"", text.chars().take(17).collect::<String>())
        }
        Some(text) => format!("\"{text}\""),
        None => "(anon)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Anchor, AnchorPoint, WidgetType};

    fn scene() -> WidgetRegistry {
        let mut reg = WidgetRegistry::new();
        let mut root = Frame::new(WidgetType::Frame, Some("UIParent".into()), None);
        root.set_size(1024.0, 768.0);
        let root_id = reg.register(root);
        reg.set_root(root_id);

        let mut panel = Frame::new(WidgetType::Frame, Some("Panel".into()), Some(root_id));
        panel.set_size(200.0, 100.0);
        panel.set_point(Anchor { x_offset: 10.0, y_offset: -20.0, ..Anchor::to_parent(AnchorPoint::TopLeft) });
        let panel_id = reg.register(panel);
        reg.add_child(root_id, panel_id);

        let mut label = Frame::new(WidgetType::FontString, None, Some(panel_id));
        label.text = Some("Settings".into());
        let label_id = reg.register(label);
        reg.add_child(panel_id, label_id);

        let mut gone = Frame::new(WidgetType::Button, Some("Gone".into()), Some(root_id));
        gone.set_size(50.0, 50.0);
        gone.visible = false;
        gone.set_point(Anchor { x_offset: 2000.0, ..Anchor::to_parent(AnchorPoint::TopLeft) });
        let gone_id = reg.register(gone);
        reg.add_child(root_id, gone_id);

        let mut overlay = Frame::new(WidgetType::Frame, None, Some(root_id));
        overlay.is_overlay = true;
        let overlay_id = reg.register(overlay);
        reg.add_child(root_id, overlay_id);
        reg
    }

    #[test]
    fn full_dump_lists_flags() {
        let dump = build_frame_tree_dump(&scene(), 1024.0, 768.0, &DumpOptions::default());
        insta::assert_snapshot!(dump, @r#"
        UIParent [Frame] (0,0 1024x768)
          Panel [Frame] (10,20 200x100)
            "Settings" [FontString] (10,20 0x0) ! ZERO_WIDTH, ZERO_HEIGHT
          Gone [Button] (2000,0 50x50) ! OFFSCREEN_X, HIDDEN
        "#);
    }

    #[test]
    fn filter_keeps_ancestors_of_matches() {
        let options = DumpOptions { filter: Some("settings"), ..DumpOptions::default() };
        let dump = build_frame_tree_dump(&scene(), 1024.0, 768.0, &options);
        assert_eq!(dump.lines().count(), 3);
        assert!(!dump.contains("Gone"));
    }

    #[test]
    fn visible_only_skips_hidden_subtrees() {
        let options = DumpOptions { visible_only: true, ..DumpOptions::default() };
        let dump = build_frame_tree_dump(&scene(), 1024.0, 768.0, &options);
        assert!(!dump.contains("Gone"));
        assert!(dump.contains("Panel"));
    }

    #[test]
    fn no_match_reports_empty() {
        let options = DumpOptions { filter: Some("nothing"), ..DumpOptions::default() };
        assert_eq!(build_frame_tree_dump(&scene(), 1024.0, 768.0, &options), "No frames found");
    }
}
