//! Frame handle and methods for WoW frame userdata.

mod handle;
mod methods;

pub use handle::{extract_frame_id, frame_value, FrameHandle};
pub(crate) use methods::methods_helpers::{resolve_frame_arg, substitute_parent_name};
