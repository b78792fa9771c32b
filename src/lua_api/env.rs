//! WoW Lua environment.

use super::frame::frame_value;
use super::script_helpers::get_script;
use super::SimState;
use crate::config::InspectorConfig;
use crate::inspector::{FrameStackInspector, InspectorReport, TickOutcome};
use crate::Result;
use mlua::{Lua, MultiValue, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// The WoW Lua environment with the frame stack inspector attached.
pub struct WowLuaEnv {
    lua: Lua,
    state: Rc<RefCell<SimState>>,
    inspector: Rc<RefCell<FrameStackInspector>>,
}

impl WowLuaEnv {
    /// Create a new WoW Lua environment with the API initialized.
    pub fn new() -> Result<Self> {
        Self::with_config(&InspectorConfig::default())
    }

    pub fn with_config(config: &InspectorConfig) -> Result<Self> {
        let lua = Lua::new();
        let state = Rc::new(RefCell::new(SimState::new(config.screen_width, config.screen_height)));
        let inspector = {
            let mut s = state.borrow_mut();
            Rc::new(RefCell::new(FrameStackInspector::new(&mut *s, config)))
        };

        super::globals::register_globals(&lua, Rc::clone(&state), Rc::clone(&inspector))?;

        Ok(Self { lua, state, inspector })
    }

    /// Execute Lua code.
    pub fn exec(&self, code: &str) -> Result<()> {
        self.lua.load(code).exec()?;
        Ok(())
    }

    /// Execute Lua code with a custom chunk name (for better error messages).
    pub fn exec_named(&self, code: &str, name: &str) -> Result<()> {
        self.lua.load(code).set_name(name).exec()?;
        Ok(())
    }

    /// Execute Lua code and return the result.
    pub fn eval<T: mlua::FromLuaMulti>(&self, code: &str) -> Result<T> {
        let result = self.lua.load(code).eval()?;
        Ok(result)
    }

    /// Dispatch a slash command (e.g., "/fstack").
    /// Returns Ok(true) if a handler was found and called, Ok(false) if no handler matched.
    pub fn dispatch_slash_command(&self, input: &str) -> Result<bool> {
        let input = input.trim();
        if !input.starts_with('/') {
            return Ok(false);
        }

        // "/cmd some message" -> cmd="/cmd", msg="some message"
        let (cmd, msg) = match input.find(' ') {
            Some(pos) => (&input[..pos], input[pos + 1..].trim()),
            None => (input, ""),
        };
        let cmd_lower = cmd.to_lowercase();

        let globals = self.lua.globals();
        let slash_cmd_list: mlua::Table = globals.get("SlashCmdList")?;

        // Handlers are found through SLASH_<NAME><n> globals
        for pair in globals.pairs::<Value, Value>() {
            let (key, value) = pair?;
            let (Value::String(key), Value::String(command)) = (key, value) else {
                continue;
            };
            let key = key.to_string_lossy();
            let Some(suffix) = key.strip_prefix("SLASH_") else {
                continue;
            };
            let name = suffix.trim_end_matches(|c: char| c.is_ascii_digit());
            if name.is_empty() || command.to_string_lossy().to_lowercase() != cmd_lower {
                continue;
            }
            if let Some(handler) = slash_cmd_list.get::<Option<mlua::Function>>(name)? {
                tracing::debug!(command = cmd, handler = name, "dispatching slash command");
                handler.call::<()>(msg)?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Fire OnUpdate handlers of visible frames.
    ///
    /// A failing handler is logged and does not stop the others.
    pub fn fire_on_update(&self, elapsed: f64) -> Result<()> {
        let frame_ids: Vec<u64> = {
            let state = self.state.borrow();
            state
                .on_update_frames
                .iter()
                .copied()
                .filter(|&id| state.widgets.is_visible(id))
                .collect()
        };

        for widget_id in frame_ids {
            let Some(handler) = get_script(&self.lua, widget_id, "OnUpdate")? else {
                continue;
            };
            let frame = frame_value(&self.lua, &self.state, widget_id)?;
            if let Err(e) = handler.call::<()>(MultiValue::from_vec(vec![frame, Value::Number(elapsed)])) {
                let name = self.frame_name(widget_id).unwrap_or_else(|| format!("id={widget_id}"));
                tracing::warn!(frame = %name, "OnUpdate error: {e}");
            }
        }
        Ok(())
    }

    /// One display refresh: OnUpdate scripts, then the inspector at the
    /// current cursor.
    pub fn tick(&self, elapsed: f64) -> Result<TickOutcome> {
        self.fire_on_update(elapsed)?;
        let mut state = self.state.borrow_mut();
        let cursor = state.cursor;
        Ok(self.inspector.borrow_mut().tick(&mut *state, cursor))
    }

    /// Move the cursor, in screen space (origin top-left, y down).
    pub fn set_cursor(&self, x: f32, y: f32) {
        self.state.borrow_mut().cursor = (x, y);
    }

    /// Flip the inspector on or off, like `/fstack`. Returns the new state.
    pub fn toggle_inspector(&self) -> bool {
        let mut state = self.state.borrow_mut();
        self.inspector.borrow_mut().toggle(&mut *state)
    }

    pub fn inspector_report(&self) -> InspectorReport {
        let state = self.state.borrow();
        self.inspector.borrow().report(&*state)
    }

    /// Take and clear captured print() output.
    pub fn take_console_output(&self) -> Vec<String> {
        std::mem::take(&mut self.state.borrow_mut().console_output)
    }

    pub fn frame_id(&self, name: &str) -> Option<u64> {
        self.state.borrow().widgets.get_id_by_name(name)
    }

    fn frame_name(&self, id: u64) -> Option<String> {
        self.state.borrow().widgets.get(id).and_then(|f| f.name.clone())
    }

    /// Get access to the Lua state.
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Get access to the simulator state.
    pub fn state(&self) -> &Rc<RefCell<SimState>> {
        &self.state
    }

    pub fn inspector(&self) -> &Rc<RefCell<FrameStackInspector>> {
        &self.inspector
    }
}
