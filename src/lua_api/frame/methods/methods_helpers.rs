//! Argument helpers shared by frame methods.

use super::FrameHandle;
use crate::lua_api::SimState;
use mlua::Value;

/// Numeric argument; Lua integers and floats both count.
pub fn get_number(v: &Value) -> Option<f32> {
    match v {
        Value::Number(n) => Some(*n as f32),
        Value::Integer(n) => Some(*n as f32),
        _ => None,
    }
}

pub fn get_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.to_string_lossy().to_string()),
        _ => None,
    }
}

/// A frame argument given either as a frame handle or a global frame name.
pub fn resolve_frame_arg(state: &SimState, value: &Value) -> Option<u64> {
    match value {
        Value::UserData(ud) => ud.borrow::<FrameHandle>().ok().map(|h| h.id),
        Value::String(s) => state.widgets.get_id_by_name(&s.to_string_lossy()),
        _ => None,
    }
}

/// Replace `$parent` / `$Parent` with the parent's name (empty when the
/// parent is anonymous).
pub fn substitute_parent_name(name: &str, parent_name: Option<&str>) -> String {
    let parent = parent_name.unwrap_or("");
    name.replace("$parent", parent).replace("$Parent", parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_substitution() {
        assert_eq!(substitute_parent_name("$parentIcon", Some("MyButton")), "MyButtonIcon");
        assert_eq!(substitute_parent_name("$ParentText", None), "Text");
        assert_eq!(substitute_parent_name("Plain", Some("X")), "Plain");
    }
}
