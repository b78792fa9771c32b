//! Script handler storage.
//!
//! Handlers live in the `__scripts` table of the Lua registry, keyed by
//! `"<frame id>_<handler>"`, invisible to addon Lua code.

use mlua::{Lua, Value};

const SCRIPTS_KEY: &str = "__scripts";

fn scripts_table(lua: &Lua) -> mlua::Result<mlua::Table> {
    if let Some(table) = lua.named_registry_value::<Option<mlua::Table>>(SCRIPTS_KEY)? {
        return Ok(table);
    }
    let table = lua.create_table()?;
    lua.set_named_registry_value(SCRIPTS_KEY, table.clone())?;
    Ok(table)
}

fn script_key(widget_id: u64, handler_name: &str) -> String {
    format!("{widget_id}_{handler_name}")
}

/// Get the script handler for a given frame + handler name.
pub fn get_script(lua: &Lua, widget_id: u64, handler_name: &str) -> mlua::Result<Option<mlua::Function>> {
    scripts_table(lua)?.get(script_key(widget_id, handler_name))
}

/// Set or, with `None`, remove a script handler.
pub fn set_script(lua: &Lua, widget_id: u64, handler_name: &str, func: Option<mlua::Function>) -> mlua::Result<()> {
    let value = func.map(Value::Function).unwrap_or(Value::Nil);
    scripts_table(lua)?.set(script_key(widget_id, handler_name), value)
}
