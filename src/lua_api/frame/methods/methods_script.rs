//! Script methods: SetScript, GetScript, HasScript.

use super::FrameHandle;
use crate::lua_api::script_helpers::{get_script, set_script};
use mlua::UserDataMethods;

pub fn add_script_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // SetScript(handler, func) - nil removes the handler
    methods.add_method("SetScript", |lua, this, (handler, func): (String, Option<mlua::Function>)| {
        let is_on_update = handler == "OnUpdate";
        let present = func.is_some();
        set_script(lua, this.id, &handler, func)?;
        if is_on_update {
            let mut state = this.state.borrow_mut();
            if present {
                state.on_update_frames.insert(this.id);
            } else {
                state.on_update_frames.remove(&this.id);
            }
        }
        Ok(())
    });

    methods.add_method("GetScript", |lua, this, handler: String| {
        get_script(lua, this.id, &handler)
    });

    methods.add_method("HasScript", |_, _this, handler: String| {
        Ok(handler.starts_with("On"))
    });
}
