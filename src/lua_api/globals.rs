//! Global WoW API functions.

use super::frame::{frame_value, resolve_frame_arg, substitute_parent_name};
use super::SimState;
use crate::hit::{build_hit_grid, HitTestOptions};
use crate::inspector::FrameStackInspector;
use crate::widget::WidgetType;
use mlua::{Lua, Result, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Slash command that toggles the frame stack inspector.
pub const FRAMESTACK_SLASH: &str = "/fstack";

/// Register all global functions into the Lua environment.
pub fn register_globals(
    lua: &Lua,
    state: Rc<RefCell<SimState>>,
    inspector: Rc<RefCell<FrameStackInspector>>,
) -> Result<()> {
    register_print(lua, Rc::clone(&state))?;
    register_ui_parent(lua, &state)?;
    register_create_frame(lua, Rc::clone(&state))?;
    register_screen_functions(lua, Rc::clone(&state))?;
    register_mouse_foci(lua, Rc::clone(&state))?;
    register_frame_stack(lua, state, inspector)?;
    Ok(())
}

/// Override print to capture output to the console buffer.
fn register_print(lua: &Lua, state: Rc<RefCell<SimState>>) -> Result<()> {
    let print_func = lua.create_function(move |lua, args: mlua::Variadic<Value>| {
        let mut output = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                output.push('\t');
            }
            match arg {
                Value::Nil => output.push_str("nil"),
                Value::Boolean(b) => output.push_str(if *b { "true" } else { "false" }),
                Value::Integer(n) => output.push_str(&n.to_string()),
                Value::Number(n) => output.push_str(&n.to_string()),
                Value::String(s) => output.push_str(&s.to_string_lossy()),
                Value::Table(_) => output.push_str("table"),
                Value::Function(_) => output.push_str("function"),
                Value::UserData(_) => {
                    let tostring: mlua::Function = lua.globals().get("tostring")?;
                    output.push_str(&tostring.call::<String>(arg.clone())?);
                }
                other => output.push_str(&format!("{other:?}")),
            }
        }
        state.borrow_mut().console_output.push(output);
        Ok(())
    })?;
    lua.globals().set("print", print_func)
}

fn register_ui_parent(lua: &Lua, state: &Rc<RefCell<SimState>>) -> Result<()> {
    let Some(root) = state.borrow().ui_parent_id() else {
        return Ok(());
    };
    lua.globals().set("UIParent", frame_value(lua, state, root)?)
}

/// CreateFrame(frameType [, name [, parent [, template]]])
fn register_create_frame(lua: &Lua, state: Rc<RefCell<SimState>>) -> Result<()> {
    let create_frame = lua.create_function(move |lua, args: mlua::MultiValue| {
        let mut args = args.into_iter();
        let frame_type: String = match args.next() {
            Some(Value::String(s)) => s.to_string_lossy().to_string(),
            _ => return Err(mlua::Error::RuntimeError("CreateFrame: frameType must be a string".into())),
        };
        let widget_type = WidgetType::from_str(&frame_type)
            .filter(|t| !t.is_region())
            .ok_or_else(|| mlua::Error::RuntimeError(format!("CreateFrame: Unknown frame type '{frame_type}'")))?;
        let name = match args.next() {
            Some(Value::String(s)) => Some(s.to_string_lossy().to_string()),
            _ => None,
        };
        let parent_arg = args.next().unwrap_or(Value::Nil);

        let id = {
            let mut s = state.borrow_mut();
            let parent_id = resolve_frame_arg(&s, &parent_arg);
            let parent_name = parent_id.and_then(|pid| s.widgets.get(pid)).and_then(|p| p.name.clone());
            let name = name.map(|n| substitute_parent_name(&n, parent_name.as_deref()));
            let id = s.create_widget(widget_type, name, parent_id);
            if matches!(widget_type, WidgetType::Button | WidgetType::CheckButton | WidgetType::EditBox | WidgetType::Slider) {
                if let Some(frame) = s.widgets.get_mut(id) {
                    frame.mouse_enabled = true;
                }
            }
            id
        };

        let value = frame_value(lua, &state, id)?;
        let name = state.borrow().widgets.get(id).and_then(|f| f.name.clone());
        if let Some(name) = name {
            lua.globals().set(name, value.clone())?;
        }
        Ok(value)
    })?;
    lua.globals().set("CreateFrame", create_frame)
}

/// Cursor and screen queries. Coordinates are WoW client coordinates
/// (origin bottom-left, y up).
fn register_screen_functions(lua: &Lua, state: Rc<RefCell<SimState>>) -> Result<()> {
    let globals = lua.globals();

    let st = Rc::clone(&state);
    globals.set("GetCursorPosition", lua.create_function(move |_, ()| Ok(st.borrow().cursor_wow()))?)?;

    // SetCursorPosition(x, y) - simulator hook for moving the mouse
    let st = Rc::clone(&state);
    globals.set(
        "SetCursorPosition",
        lua.create_function(move |_, (x, y): (f32, f32)| {
            st.borrow_mut().set_cursor_wow(x, y);
            Ok(())
        })?,
    )?;

    let st = Rc::clone(&state);
    globals.set("GetScreenWidth", lua.create_function(move |_, ()| Ok(st.borrow().screen_width))?)?;

    let st = state;
    globals.set("GetScreenHeight", lua.create_function(move |_, ()| Ok(st.borrow().screen_height))?)?;
    Ok(())
}

/// GetMouseFoci() - mouse-enabled frames under the cursor, topmost first.
fn register_mouse_foci(lua: &Lua, state: Rc<RefCell<SimState>>) -> Result<()> {
    let func = lua.create_function(move |lua, ()| {
        let ids: Vec<u64> = {
            let s = state.borrow();
            let grid = build_hit_grid(&s.widgets, s.screen_width, s.screen_height, HitTestOptions::default());
            let (x, y) = s.cursor;
            grid.all_at(x, y)
                .filter(|&id| s.widgets.get(id).is_some_and(|f| f.mouse_enabled && !f.is_overlay))
                .collect()
        };
        let foci = lua.create_table()?;
        for (i, id) in ids.into_iter().enumerate() {
            foci.set(i + 1, frame_value(lua, &state, id)?)?;
        }
        Ok(foci)
    })?;
    lua.globals().set("GetMouseFoci", func)
}

/// `/fstack`, `FrameStackTooltip_Toggle([showHidden, showRegions])` and
/// `FrameStackTooltip_IsActive()`.
fn register_frame_stack(
    lua: &Lua,
    state: Rc<RefCell<SimState>>,
    inspector: Rc<RefCell<FrameStackInspector>>,
) -> Result<()> {
    let globals = lua.globals();

    let (st, insp) = (Rc::clone(&state), Rc::clone(&inspector));
    let toggle = lua.create_function(move |_, (show_hidden, show_regions): (Option<bool>, Option<bool>)| {
        let mut inspector = insp.borrow_mut();
        if show_hidden.is_some() || show_regions.is_some() {
            inspector.set_hit_options(HitTestOptions {
                show_hidden: show_hidden.unwrap_or(false),
                show_regions: show_regions.unwrap_or(false),
            });
        }
        Ok(inspector.toggle(&mut *st.borrow_mut()))
    })?;
    globals.set("FrameStackTooltip_Toggle", toggle)?;

    let insp = Rc::clone(&inspector);
    globals.set("FrameStackTooltip_IsActive", lua.create_function(move |_, ()| Ok(insp.borrow().is_active()))?)?;

    // SlashCmdList table; addons add their own handlers alongside FRAMESTACK
    let slash_cmd_list = lua.create_table()?;
    let (st, insp) = (Rc::clone(&state), Rc::clone(&inspector));
    let slash_toggle = lua.create_function(move |_, _msg: Option<String>| {
        insp.borrow_mut().toggle(&mut *st.borrow_mut());
        Ok(())
    })?;
    slash_cmd_list.set("FRAMESTACK", slash_toggle)?;
    globals.set("SlashCmdList", slash_cmd_list)?;
    globals.set("SLASH_FRAMESTACK1", FRAMESTACK_SLASH)?;
    Ok(())
}
