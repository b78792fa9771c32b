//! Hierarchy methods: GetParent, SetParent, children and regions.

use super::methods_helpers::resolve_frame_arg;
use super::FrameHandle;
use crate::lua_api::frame::frame_value;
use mlua::{MultiValue, UserDataMethods, Value};

/// Add parent/child methods to FrameHandle UserData.
pub fn add_hierarchy_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // GetParent() - nil for top-level frames
    methods.add_method("GetParent", |lua, this, ()| {
        let parent_id = this.state.borrow().widgets.get(this.id).and_then(|f| f.parent_id);
        match parent_id {
            Some(pid) => frame_value(lua, &this.state, pid),
            None => Ok(Value::Nil),
        }
    });

    // SetParent(parent) - frame, global name, or nil to detach
    methods.add_method("SetParent", |_, this, parent: Value| {
        let mut state = this.state.borrow_mut();
        let new_parent = resolve_frame_arg(&state, &parent);
        if let Some(pid) = new_parent {
            if pid == this.id || state.widgets.ancestors(pid).contains(&this.id) {
                return Err(mlua::Error::RuntimeError("SetParent: would create a parent cycle".into()));
            }
        }
        state.widgets.reparent(this.id, new_parent);
        Ok(())
    });

    methods.add_method("GetNumChildren", |_, this, ()| {
        Ok(child_ids(this, false).len())
    });

    // GetChildren() - child frames as multiple return values
    methods.add_method("GetChildren", |lua, this, ()| {
        child_ids(this, false)
            .into_iter()
            .map(|id| frame_value(lua, &this.state, id))
            .collect::<mlua::Result<MultiValue>>()
    });

    methods.add_method("GetNumRegions", |_, this, ()| {
        Ok(child_ids(this, true).len())
    });

    // GetRegions() - textures and font strings as multiple return values
    methods.add_method("GetRegions", |lua, this, ()| {
        child_ids(this, true)
            .into_iter()
            .map(|id| frame_value(lua, &this.state, id))
            .collect::<mlua::Result<MultiValue>>()
    });
}

/// Children in creation order, either frames or regions.
fn child_ids(this: &FrameHandle, regions: bool) -> Vec<u64> {
    let state = this.state.borrow();
    let Some(frame) = state.widgets.get(this.id) else { return Vec::new() };
    frame
        .children
        .iter()
        .copied()
        .filter(|&cid| state.widgets.get(cid).is_some_and(|c| c.is_region() == regions))
        .collect()
}
