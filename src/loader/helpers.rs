//! Lua code generation helpers shared by the XML loaders.

use crate::xml::{AnchorsXml, SizeXml};

/// Escape a string for use inside a double-quoted Lua literal.
pub fn escape_lua_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// `"text"` as a Lua literal, or `nil`.
pub fn lua_string_or_nil(s: Option<&str>) -> String {
    match s {
        Some(s) => format!("\"{}\"", escape_lua_string(s)),
        None => "nil".to_string(),
    }
}

/// Where the generated code is creating an object: the Lua variable that
/// holds its parent and the parent's resolved name.
#[derive(Debug, Clone)]
pub struct ParentRef<'a> {
    pub var: &'a str,
    pub name: Option<&'a str>,
}

impl ParentRef<'_> {
    /// Resolve a name that may contain `$parent`.
    pub fn substitute(&self, name: &str) -> String {
        crate::lua_api::substitute_parent_name(name, self.name)
    }

    /// Lua expression for an anchor's `relativeTo`.
    fn relative_expr(&self, relative_to: Option<&str>) -> String {
        match relative_to {
            None => "nil".to_string(),
            Some(r) if r.eq_ignore_ascii_case("$parent") => self.var.to_string(),
            Some(r) => lua_string_or_nil(Some(&self.substitute(r))),
        }
    }
}

/// `SetSize`, or `SetWidth`/`SetHeight` when only one dimension is given.
pub fn generate_size_code(var: &str, size: &SizeXml) -> String {
    match size.dimensions() {
        (Some(x), Some(y)) => format!("{var}:SetSize({x}, {y})\n"),
        (Some(x), None) => format!("{var}:SetWidth({x})\n"),
        (None, Some(y)) => format!("{var}:SetHeight({y})\n"),
        (None, None) => String::new(),
    }
}

/// One `SetPoint` call per anchor. `$parent` in `relativeTo` refers to
/// the creating parent even when it is anonymous.
pub fn generate_anchors_code(var: &str, anchors: &AnchorsXml, parent: &ParentRef<'_>) -> String {
    let mut code = String::new();
    for anchor in &anchors.anchors {
        let relative_point = anchor.relative_point.as_deref().unwrap_or(anchor.point.as_str());
        let (x, y) = anchor.offset();
        code.push_str(&format!(
            "{var}:SetPoint(\"{}\", {}, \"{}\", {x}, {y})\n",
            escape_lua_string(&anchor.point),
            parent.relative_expr(anchor.relative_to.as_deref()),
            escape_lua_string(relative_point),
        ));
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::AnchorXml;

    fn anchor(point: &str, relative_to: Option<&str>, x: f32, y: f32) -> AnchorXml {
        AnchorXml {
            point: point.to_string(),
            relative_to: relative_to.map(str::to_string),
            relative_point: None,
            x: Some(x),
            y: Some(y),
            offset: None,
        }
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_lua_string(r#"Interface\Icons\"x""#), r#"Interface\\Icons\\\"x\""#);
        assert_eq!(lua_string_or_nil(None), "nil");
    }

    #[test]
    fn anchors_resolve_parent_references() {
        let anchors = AnchorsXml {
            anchors: vec![
                anchor("TOPLEFT", Some("$parent"), 4.0, -6.0),
                anchor("BOTTOM", Some("$parentTitle"), 0.0, 2.0),
                anchor("CENTER", None, 0.0, 0.0),
            ],
        };
        let parent = ParentRef { var: "f1", name: Some("Outer") };
        let code = generate_anchors_code("f2", &anchors, &parent);
        assert_eq!(
            code,
            "f2:SetPoint(\"TOPLEFT\", f1, \"TOPLEFT\", 4, -6)\n\
             f2:SetPoint(\"BOTTOM\", \"OuterTitle\", \"BOTTOM\", 0, 2)\n\
             f2:SetPoint(\"CENTER\", nil, \"CENTER\", 0, 0)\n"
        );
    }

    #[test]
    fn partial_sizes_set_one_dimension() {
        let size = SizeXml { x: Some(120.0), ..SizeXml::default() };
        assert_eq!(generate_size_code("f", &size), "f:SetWidth(120)\n");
    }
}
