//! Text rendering of [`FrameDetails`] for the details panel.
//!
//! Lines use WoW color escapes (`|cffRRGGBB ... |r`); use
//! [`strip_color_codes`] for plain terminals.

use super::host::{AnchorInfo, FrameDetails};

/// Placeholder for attributes the host could not provide.
pub const UNKNOWN: &str = "Unknown";
/// Display name for frames without a global name.
pub const ANONYMOUS: &str = "anonymous";

const TITLE_COLOR: &str = "ffd100";
const SECTION_COLOR: &str = "80c0ff";

pub fn format_details(d: &FrameDetails) -> Vec<String> {
    let mut lines = vec![
        colored(TITLE_COLOR, d.name.as_deref().unwrap_or(ANONYMOUS)),
        format!("Type: {}", text_or_unknown(d.object_type.as_deref())),
        format!("Size: {} x {}", num_or_unknown(d.width), num_or_unknown(d.height)),
        format!("Position: {}, {}", num_or_unknown(d.left), num_or_unknown(d.bottom)),
        format!(
            "Strata: {} (level {})",
            text_or_unknown(d.strata.as_deref()),
            d.level.map(|l| l.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
        ),
        format!("Shown: {}, Visible: {}", yes_no(d.shown), yes_no(d.visible)),
        format!("Alpha: {}, Scale: {}", fixed2(d.alpha), fixed2(d.scale)),
        format!(
            "Mouse: {}",
            match d.mouse_enabled {
                Some(true) => "enabled",
                Some(false) => "disabled",
                None => UNKNOWN,
            }
        ),
        format!("Children: {}, Regions: {}", count(d.num_children), count(d.num_regions)),
    ];

    push_section(&mut lines, "Anchors", d.anchors.as_deref(), |i, a| format!("  {}. {}", i + 1, anchor_line(a)));
    push_section(&mut lines, "Textures", d.textures.as_deref(), |_, t| format!("  {t}"));

    let parents = match &d.parent_chain {
        None => UNKNOWN.to_string(),
        Some(chain) if chain.is_empty() => "none".to_string(),
        Some(chain) => chain
            .iter()
            .map(|n| n.as_deref().unwrap_or(ANONYMOUS))
            .collect::<Vec<_>>()
            .join(" > "),
    };
    lines.push(format!("{}: {parents}", colored(SECTION_COLOR, "Parents")));
    lines
}

fn push_section<T>(lines: &mut Vec<String>, title: &str, items: Option<&[T]>, line: impl Fn(usize, &T) -> String) {
    let heading = colored(SECTION_COLOR, title);
    match items {
        None => lines.push(format!("{heading}: {UNKNOWN}")),
        Some([]) => lines.push(format!("{heading}: none")),
        Some(items) => {
            lines.push(format!("{heading}:"));
            lines.extend(items.iter().enumerate().map(|(i, item)| line(i, item)));
        }
    }
}

fn anchor_line(a: &AnchorInfo) -> String {
    format!(
        "{} -> {}:{} ({}, {})",
        a.point,
        a.relative_to.as_deref().unwrap_or("$parent"),
        a.relative_point,
        fmt_num(a.x),
        fmt_num(a.y)
    )
}

fn colored(hex: &str, text: &str) -> String {
    format!("|cff{hex}{text}|r")
}

fn text_or_unknown(v: Option<&str>) -> &str {
    v.unwrap_or(UNKNOWN)
}

fn num_or_unknown(v: Option<f32>) -> String {
    v.map(fmt_num).unwrap_or_else(|| UNKNOWN.to_string())
}

fn fixed2(v: Option<f32>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| UNKNOWN.to_string())
}

fn count(v: Option<usize>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
}

fn yes_no(v: Option<bool>) -> &'static str {
    match v {
        Some(true) => "yes",
        Some(false) => "no",
        None => UNKNOWN,
    }
}

/// Whole numbers without decimals, everything else with one.
fn fmt_num(v: f32) -> String {
    if (v - v.round()).abs() < 0.005 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Remove `|cffRRGGBB` and `|r` escapes.
pub fn strip_color_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('|') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let bytes = tail.as_bytes();
        let is_color = bytes.len() >= 10
            && bytes[1].eq_ignore_ascii_case(&b'c')
            && bytes[2..10].iter().all(u8::is_ascii_hexdigit);
        if is_color {
            rest = &tail[10..];
        } else if tail.starts_with("|r") || tail.starts_with("|R") {
            rest = &tail[2..];
        } else {
            out.push('|');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Length of the text as displayed, escapes excluded.
pub fn visible_len(s: &str) -> usize {
    strip_color_codes(s).chars().count()
}
