//! Region methods: CreateTexture, CreateFontString, SetTexture, SetText, etc.

use super::methods_helpers::{get_number, get_string, substitute_parent_name};
use super::FrameHandle;
use crate::lua_api::frame::frame_value;
use crate::widget::{Color, WidgetType};
use mlua::{Lua, MultiValue, UserDataMethods, Value};

/// Add texture/font string methods to FrameHandle UserData.
pub fn add_texture_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // CreateTexture([name [, layer [, template [, subLevel]]]])
    methods.add_method("CreateTexture", |lua, this, args: MultiValue| {
        create_region(lua, this, WidgetType::Texture, args)
    });

    // CreateFontString([name [, layer [, template]]])
    methods.add_method("CreateFontString", |lua, this, args: MultiValue| {
        create_region(lua, this, WidgetType::FontString, args)
    });

    // SetTexture(path) - nil clears; numeric file IDs are kept as text
    methods.add_method("SetTexture", |_, this, path: Value| {
        let texture = match &path {
            Value::Integer(n) => Some(n.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => get_string(other),
        };
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.texture = texture;
        }
        Ok(())
    });

    methods.add_method("GetTexture", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).and_then(|f| f.texture.clone()))
    });

    // SetColorTexture(r, g, b [, a]) - solid color replaces any texture file
    methods.add_method("SetColorTexture", |_, this, (r, g, b, a): (f32, f32, f32, Option<f32>)| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.texture = None;
            frame.vertex_color = Some(Color::new(r, g, b, a.unwrap_or(1.0)));
        }
        Ok(())
    });

    // SetText(text) - numbers are converted like tostring()
    methods.add_method("SetText", |_, this, text: Value| {
        let text = match &text {
            Value::Nil => None,
            other => get_string(other).or_else(|| get_number(other).map(|n| n.to_string())),
        };
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.text = text;
        }
        Ok(())
    });

    methods.add_method("GetText", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).and_then(|f| f.text.clone()))
    });
}

/// Create a texture or font string owned by `this`. Named regions become
/// Lua globals.
fn create_region(lua: &Lua, this: &FrameHandle, widget_type: WidgetType, args: MultiValue) -> mlua::Result<Value> {
    let raw_name = args.into_iter().next().as_ref().and_then(get_string);
    let id = {
        let mut state = this.state.borrow_mut();
        let parent_name = state.widgets.get(this.id).and_then(|f| f.name.clone());
        let name = raw_name.map(|n| substitute_parent_name(&n, parent_name.as_deref()));
        let id = state.create_widget(widget_type, name, Some(this.id));
        if let Some(region) = state.widgets.get_mut(id) {
            region.mouse_enabled = false;
        }
        id
    };

    let value = frame_value(lua, &this.state, id)?;
    let name = this.state.borrow().widgets.get(id).and_then(|f| f.name.clone());
    if let Some(name) = name {
        lua.globals().set(name, value.clone())?;
    }
    Ok(value)
}
