//! XML file loading.

use std::path::Path;

use tracing::{debug, warn};

use crate::lua_api::WowLuaEnv;
use crate::xml::{parse_xml, XmlElement};
use crate::Result;

use super::helpers::ParentRef;
use super::xml_frame::FrameCodegen;
use super::{load_lua_file, LoadResult};

/// Load an XML file; `<Script file>` includes resolve next to it.
pub fn load_xml_file(env: &WowLuaEnv, path: &Path) -> Result<LoadResult> {
    let contents = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    debug!(path = %path.display(), "loading XML file");
    load_xml_str(env, &contents, base_dir)
}

/// Instantiate an XML document. Elements are processed in document order.
pub fn load_xml_str(env: &WowLuaEnv, xml: &str, base_dir: &Path) -> Result<LoadResult> {
    let ui = parse_xml(xml)?;
    let mut result = LoadResult { xml_files: 1, ..LoadResult::default() };

    for element in &ui.elements {
        if let XmlElement::Script(script) = element {
            load_lua_file(env, &base_dir.join(script.file.replace('\\', "/")))?;
            result.lua_files += 1;
            continue;
        }
        let Some((widget_type, frame)) = element.as_frame() else {
            continue;
        };

        let parent_name = resolve_parent(env, frame.parent.as_deref());
        let mut codegen = FrameCodegen::new();
        codegen.append_frame(frame, widget_type, &ParentRef { var: &parent_global(&parent_name), name: Some(&parent_name) });
        let chunk_name = frame.name.as_deref().unwrap_or(widget_type);
        env.exec_named(&codegen.finish(), &format!("={chunk_name}"))?;
        result.frames += 1;
    }
    Ok(result)
}

/// Name of an existing frame to parent top-level frames to; unknown or
/// missing parents fall back to UIParent.
fn resolve_parent(env: &WowLuaEnv, parent: Option<&str>) -> String {
    match parent {
        Some(name) if env.frame_id(name).is_some() => name.to_string(),
        Some(name) => {
            warn!(parent = name, "XML parent frame not found, using UIParent");
            "UIParent".to_string()
        }
        None => "UIParent".to_string(),
    }
}

fn parent_global(name: &str) -> String {
    format!("_G[\"{}\"]", super::helpers::escape_lua_string(name))
}
