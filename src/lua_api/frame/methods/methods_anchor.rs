//! Size, anchor and rect methods: SetSize, SetPoint, GetPoint, GetRect, etc.
//!
//! Rect getters answer in the frame's own scaled coordinate space with the
//! origin at the bottom-left of the screen, like the client.

use super::methods_helpers::{get_number, get_string, resolve_frame_arg};
use super::FrameHandle;
use crate::layout::{compute_frame_rect, LayoutRect};
use crate::lua_api::frame::frame_value;
use crate::lua_api::SimState;
use crate::widget::{Anchor, AnchorPoint};
use mlua::{MultiValue, UserDataMethods, Value};

/// Add size/anchor/rect methods to FrameHandle UserData.
pub fn add_anchor_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    add_size_methods(methods);
    add_point_methods(methods);
    add_rect_methods(methods);
}

fn add_size_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    methods.add_method("SetSize", |_, this, (width, height): (f32, Option<f32>)| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.set_size(width, height.unwrap_or(width));
        }
        Ok(())
    });

    methods.add_method("SetWidth", |_, this, width: f32| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.width = width;
        }
        Ok(())
    });

    methods.add_method("SetHeight", |_, this, height: f32| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.height = height;
        }
        Ok(())
    });

    // GetWidth() - anchored edges override the explicit width
    methods.add_method("GetWidth", |_, this, ()| {
        let state = this.state.borrow();
        Ok(scaled_rect(&state, this.id).map(|r| r.width).unwrap_or(0.0))
    });

    methods.add_method("GetHeight", |_, this, ()| {
        let state = this.state.borrow();
        Ok(scaled_rect(&state, this.id).map(|r| r.height).unwrap_or(0.0))
    });

    methods.add_method("GetSize", |_, this, ()| {
        let state = this.state.borrow();
        let rect = scaled_rect(&state, this.id).unwrap_or_default();
        Ok((rect.width, rect.height))
    });
}

fn add_point_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // SetPoint(point [, relativeTo [, relativePoint]] [, x, y])
    methods.add_method("SetPoint", |_, this, args: MultiValue| {
        let args: Vec<Value> = args.into_iter().collect();
        let mut state = this.state.borrow_mut();
        let anchor = parse_set_point(&state, &args)?;

        if let Some(rel_id) = anchor.relative_to_id {
            if state.widgets.would_create_anchor_cycle(this.id, rel_id) {
                tracing::warn!(frame = this.id, relative_to = rel_id, "SetPoint would create an anchor cycle, ignored");
                return Ok(());
            }
        }

        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.set_point(anchor);
        }
        Ok(())
    });

    methods.add_method("ClearAllPoints", |_, this, ()| {
        let mut state = this.state.borrow_mut();
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.clear_all_points();
        }
        Ok(())
    });

    // SetAllPoints([relativeTo]) - cover relativeTo, or the parent
    methods.add_method("SetAllPoints", |_, this, relative_to: Option<Value>| {
        let mut state = this.state.borrow_mut();
        let rel_id = relative_to.as_ref().and_then(|v| resolve_frame_arg(&state, v));
        if let Some(rel) = rel_id {
            if state.widgets.would_create_anchor_cycle(this.id, rel) {
                tracing::warn!(frame = this.id, relative_to = rel, "SetAllPoints would create an anchor cycle, ignored");
                return Ok(());
            }
        }
        if let Some(frame) = state.widgets.get_mut(this.id) {
            frame.clear_all_points();
            for point in [AnchorPoint::TopLeft, AnchorPoint::BottomRight] {
                frame.set_point(Anchor { relative_to_id: rel_id, ..Anchor::to_parent(point) });
            }
        }
        Ok(())
    });

    methods.add_method("GetNumPoints", |_, this, ()| {
        let state = this.state.borrow();
        Ok(state.widgets.get(this.id).map(|f| f.anchors.len()).unwrap_or(0))
    });

    // GetPoint([index]) -> point, relativeTo, relativePoint, x, y
    methods.add_method("GetPoint", |lua, this, index: Option<usize>| {
        let (anchor, parent_id) = {
            let state = this.state.borrow();
            let Some(frame) = state.widgets.get(this.id) else {
                return Ok(MultiValue::new());
            };
            let Some(anchor) = frame.anchors.get(index.unwrap_or(1).saturating_sub(1)).cloned() else {
                return Ok(MultiValue::new());
            };
            (anchor, frame.parent_id)
        };
        let relative = match anchor.relative_to_id.or(parent_id) {
            Some(id) => frame_value(lua, &this.state, id)?,
            None => Value::Nil,
        };
        Ok(MultiValue::from_vec(vec![
            Value::String(lua.create_string(anchor.point.as_str())?),
            relative,
            Value::String(lua.create_string(anchor.relative_point.as_str())?),
            Value::Number(anchor.x_offset as f64),
            Value::Number(anchor.y_offset as f64),
        ]))
    });
}

/// Parse the `SetPoint` argument forms:
/// `(point)`, `(point, x, y)`, `(point, relativeTo)`,
/// `(point, relativeTo, relativePoint)` and the full five-argument form.
fn parse_set_point(state: &SimState, args: &[Value]) -> mlua::Result<Anchor> {
    let point_str = args.first().and_then(get_string).unwrap_or_else(|| "CENTER".to_string());
    let point = AnchorPoint::from_str(&point_str)
        .ok_or_else(|| mlua::Error::RuntimeError(format!("SetPoint: unknown anchor point {point_str:?}")))?;

    let numbers_from = |i: usize| (args.get(i).and_then(get_number), args.get(i + 1).and_then(get_number));

    let anchor = if let (Some(x), Some(y)) = numbers_from(1) {
        Anchor { x_offset: x, y_offset: y, ..Anchor::to_parent(point) }
    } else {
        let relative_to_id = args.get(1).and_then(|v| resolve_frame_arg(state, v));
        if let Some(Value::String(name)) = args.get(1) {
            if relative_to_id.is_none() {
                tracing::debug!(name = %name.to_string_lossy(), "SetPoint relative frame not found, using parent");
            }
        }
        let relative_point = args
            .get(2)
            .and_then(get_string)
            .and_then(|s| AnchorPoint::from_str(&s))
            .unwrap_or(point);
        let (x, y) = match numbers_from(3) {
            (Some(x), Some(y)) => (x, y),
            _ => match numbers_from(2) {
                (Some(x), Some(y)) => (x, y),
                _ => (0.0, 0.0),
            },
        };
        Anchor { point, relative_to_id, relative_point, x_offset: x, y_offset: y }
    };
    Ok(anchor)
}

fn add_rect_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    // GetRect() -> left, bottom, width, height (nil when not positioned)
    methods.add_method("GetRect", |_, this, ()| {
        let state = this.state.borrow();
        let screen_h = screen_height_scaled(&state, this.id);
        Ok(match positioned_rect(&state, this.id) {
            Some(r) => {
                let (left, bottom) = r.wow_left_bottom(screen_h);
                (Some(left), Some(bottom), Some(r.width), Some(r.height))
            }
            None => (None, None, None, None),
        })
    });

    methods.add_method("GetLeft", |_, this, ()| {
        let state = this.state.borrow();
        Ok(positioned_rect(&state, this.id).map(|r| r.x))
    });

    methods.add_method("GetRight", |_, this, ()| {
        let state = this.state.borrow();
        Ok(positioned_rect(&state, this.id).map(|r| r.right()))
    });

    methods.add_method("GetTop", |_, this, ()| {
        let state = this.state.borrow();
        let screen_h = screen_height_scaled(&state, this.id);
        Ok(positioned_rect(&state, this.id).map(|r| screen_h - r.y))
    });

    methods.add_method("GetBottom", |_, this, ()| {
        let state = this.state.borrow();
        let screen_h = screen_height_scaled(&state, this.id);
        Ok(positioned_rect(&state, this.id).map(|r| screen_h - r.bottom()))
    });

    // GetCenter() -> x, y
    methods.add_method("GetCenter", |_, this, ()| {
        let state = this.state.borrow();
        let screen_h = screen_height_scaled(&state, this.id);
        Ok(match positioned_rect(&state, this.id) {
            Some(r) => {
                let (cx, cy) = r.center();
                (Some(cx), Some(screen_h - cy))
            }
            None => (None, None),
        })
    });
}

/// Screen-space rect divided by the frame's effective scale.
fn scaled_rect(state: &SimState, id: u64) -> Option<LayoutRect> {
    state.widgets.get(id)?;
    let rect = compute_frame_rect(&state.widgets, id, state.screen_width, state.screen_height);
    let scale = state.widgets.effective_scale(id).max(f32::EPSILON);
    Some(LayoutRect::new(rect.x / scale, rect.y / scale, rect.width / scale, rect.height / scale))
}

/// Like [`scaled_rect`], but `None` for frames that have no anchors and are
/// not the root.
fn positioned_rect(state: &SimState, id: u64) -> Option<LayoutRect> {
    let frame = state.widgets.get(id)?;
    if frame.anchors.is_empty() && state.widgets.root_id() != Some(id) {
        return None;
    }
    scaled_rect(state, id)
}

/// Screen height in the frame's own scaled units.
fn screen_height_scaled(state: &SimState, id: u64) -> f32 {
    state.screen_height / state.widgets.effective_scale(id).max(f32::EPSILON)
}
