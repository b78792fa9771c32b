//! FrameHandle userdata for Lua-accessible WoW frames.

use crate::lua_api::SimState;
use mlua::{AnyUserData, Lua, MetaMethod, UserData, UserDataMethods, Value};
use std::cell::RefCell;
use std::rc::Rc;

const FRAME_FIELDS_KEY: &str = "__frame_fields";

/// Userdata handle to a frame (passed to Lua).
#[derive(Clone)]
pub struct FrameHandle {
    pub id: u64,
    pub state: Rc<RefCell<SimState>>,
}

impl FrameHandle {
    pub fn new(id: u64, state: &Rc<RefCell<SimState>>) -> Self {
        Self { id, state: Rc::clone(state) }
    }
}

/// Wrap `id` as a Lua frame value.
pub fn frame_value(lua: &Lua, state: &Rc<RefCell<SimState>>, id: u64) -> mlua::Result<Value> {
    Ok(Value::UserData(lua.create_userdata(FrameHandle::new(id, state))?))
}

/// Frame ID behind a Lua value, if it is a frame handle.
pub fn extract_frame_id(value: &Value) -> Option<u64> {
    match value {
        Value::UserData(ud) => ud.borrow::<FrameHandle>().ok().map(|h| h.id),
        _ => None,
    }
}

/// Per-frame table of Lua-assigned fields (`frame.foo = 1`), kept in the
/// registry so addon code never sees it.
fn frame_fields(lua: &Lua, id: u64, create: bool) -> mlua::Result<Option<mlua::Table>> {
    let all: mlua::Table = match lua.named_registry_value::<Option<mlua::Table>>(FRAME_FIELDS_KEY)? {
        Some(t) => t,
        None if create => {
            let t = lua.create_table()?;
            lua.set_named_registry_value(FRAME_FIELDS_KEY, t.clone())?;
            t
        }
        None => return Ok(None),
    };
    match all.get::<Option<mlua::Table>>(id)? {
        Some(t) => Ok(Some(t)),
        None if create => {
            let t = lua.create_table()?;
            all.set(id, t.clone())?;
            Ok(Some(t))
        }
        None => Ok(None),
    }
}

impl UserData for FrameHandle {
    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        super::methods::register_all_methods(methods);

        methods.add_meta_method(MetaMethod::Eq, |_, this, other: AnyUserData| {
            Ok(other.borrow::<FrameHandle>().is_ok_and(|o| o.id == this.id))
        });

        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let state = this.state.borrow();
            let name = state.widgets.get(this.id).and_then(|f| f.name.clone());
            Ok(match name {
                Some(name) => format!("Frame({name})"),
                None => format!("Frame(id={})", this.id),
            })
        });

        methods.add_meta_method(MetaMethod::Index, |lua, this, key: Value| {
            match frame_fields(lua, this.id, false)? {
                Some(fields) => fields.get::<Value>(key),
                None => Ok(Value::Nil),
            }
        });

        methods.add_meta_method(MetaMethod::NewIndex, |lua, this, (key, value): (Value, Value)| {
            if let Some(fields) = frame_fields(lua, this.id, true)? {
                fields.set(key, value)?;
            }
            Ok(())
        });
    }
}
