//! Core frame methods: identity, visibility, strata/level, alpha, scale, mouse.

use super::FrameHandle;
use crate::widget::FrameStrata;
use mlua::UserDataMethods;

/// Add core frame methods to FrameHandle UserData.
pub fn add_core_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    add_identity_methods(methods);
    add_visibility_methods(methods);
    add_strata_level_methods(methods);
    add_display_methods(methods);
}

/// Identity methods: GetName, GetDebugName, GetObjectType, IsObjectType
fn add_identity_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // GetName() - returns nil for unnamed frames
    methods.add_method("GetName", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).and_then(|f| f.name.clone()))
    });

    // GetDebugName() - name, or the nearest named ancestor plus the object type
    methods.add_method("GetDebugName", |_, this, ()| {
        let state = this.state.borrow();
        let Some(frame) = state.widgets.get(this.id) else {
            return Ok("[Unknown]".to_string());
        };
        if let Some(name) = &frame.name {
            return Ok(name.clone());
        }
        let named_ancestor = state
            .widgets
            .ancestors(this.id)
            .into_iter()
            .find_map(|pid| state.widgets.get(pid).and_then(|p| p.name.clone()));
        Ok(match named_ancestor {
            Some(parent) => format!("{parent}.[{}]", frame.widget_type.as_str()),
            None => format!("[{}]", frame.widget_type.as_str()),
        })
    });

    // GetObjectType()
    methods.add_method("GetObjectType", |_, this, ()| {
        let state = this.state.borrow();
        let obj_type = state
            .widgets
            .get(this.id)
            .map(|f| f.widget_type.as_str())
            .unwrap_or("Frame");
        Ok(obj_type.to_string())
    });

    // IsObjectType(type) - every frame type is also a "Frame"
    methods.add_method("IsObjectType", |_, this, type_name: String| {
        let state = this.state.borrow();
        let Some(frame) = state.widgets.get(this.id) else { return Ok(false) };
        let own = frame.widget_type.as_str();
        Ok(own.eq_ignore_ascii_case(&type_name)
            || (!frame.is_region() && type_name.eq_ignore_ascii_case("Frame"))
            || type_name.eq_ignore_ascii_case("Region"))
    });
}

/// Visibility methods: Show, Hide, SetShown, IsShown, IsVisible
fn add_visibility_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    methods.add_method("Show", |_, this, ()| {
        set_shown(this, true);
        Ok(())
    });

    methods.add_method("Hide", |_, this, ()| {
        set_shown(this, false);
        Ok(())
    });

    // SetShown(shown) - nil counts as false
    methods.add_method("SetShown", |_, this, shown: Option<bool>| {
        set_shown(this, shown.unwrap_or(false));
        Ok(())
    });

    methods.add_method("IsShown", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).is_some_and(|f| f.visible))
    });

    // IsVisible() - shown and every ancestor shown
    methods.add_method("IsVisible", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.is_visible(this.id))
    });
}

fn set_shown(this: &FrameHandle, shown: bool) {
    let mut state = this.state.borrow_mut();
    if let Some(frame) = state.widgets.get_mut(this.id) {
        frame.visible = shown;
    }
}

/// Strata/level methods: SetFrameStrata, GetFrameStrata, SetFrameLevel, GetFrameLevel
fn add_strata_level_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // SetFrameStrata(strata) - unknown strata names are ignored
    methods.add_method("SetFrameStrata", |_, this, strata: String| {
        let Some(strata) = FrameStrata::from_str(&strata) else {
            tracing::debug!(frame = this.id, strata, "ignoring unknown frame strata");
            return Ok(());
        };
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.frame_strata = strata;
            frame.has_fixed_frame_strata = true;
        }
        state.widgets.propagate_strata_level(this.id);
        Ok(())
    });

    methods.add_method("GetFrameStrata", |_, this, ()| {
        let state = this.state.borrow();
        let strata = state
            .widgets
            .get(this.id)
            .map(|f| f.frame_strata)
            .unwrap_or_default();
        Ok(strata.as_str().to_string())
    });

    methods.add_method("SetFrameLevel", |_, this, level: i32| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.frame_level = level.max(0);
            frame.has_fixed_frame_level = true;
        }
        state.widgets.propagate_strata_level(this.id);
        Ok(())
    });

    methods.add_method("GetFrameLevel", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).map(|f| f.frame_level).unwrap_or(0))
    });
}

/// Display methods: SetAlpha, GetAlpha, SetScale, GetScale, EnableMouse, IsMouseEnabled
fn add_display_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    methods.add_method("SetAlpha", |_, this, alpha: f32| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.alpha = alpha.clamp(0.0, 1.0);
        }
        Ok(())
    });

    methods.add_method("GetAlpha", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).map(|f| f.alpha).unwrap_or(1.0))
    });

    // SetScale(scale) - non-positive scales are rejected like the client does
    methods.add_method("SetScale", |_, this, scale: f32| {
        if scale <= 0.0 {
            return Err(mlua::Error::RuntimeError(format!("SetScale: scale must be > 0, got {scale}")));
        }
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.scale = scale;
        }
        Ok(())
    });

    methods.add_method("GetScale", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).map(|f| f.scale).unwrap_or(1.0))
    });

    methods.add_method("GetEffectiveScale", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.effective_scale(this.id))
    });

    // EnableMouse(enable) - nil counts as false
    methods.add_method("EnableMouse", |_, this, enable: Option<bool>| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.mouse_enabled = enable.unwrap_or(false);
        }
        Ok(())
    });

    methods.add_method("IsMouseEnabled", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).is_some_and(|f| f.mouse_enabled))
    });
}
