//! Lua API bindings implementing the slice of WoW's addon API the
//! inspector and its scenes need.

mod env;
mod frame;
mod globals;
mod host;
mod script_helpers;
mod state;

pub use env::WowLuaEnv;
pub use frame::{extract_frame_id, FrameHandle};
pub use globals::FRAMESTACK_SLASH;
pub use state::SimState;

pub(crate) use frame::substitute_parent_name;
