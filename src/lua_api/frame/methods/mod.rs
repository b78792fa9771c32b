//! Frame methods registered on the FrameHandle userdata.
//!
//! Each submodule exports `add_*_methods(&mut M)` which adds its group of
//! methods.

mod methods_anchor;
mod methods_core;
pub(crate) mod methods_helpers;
mod methods_hierarchy;
mod methods_script;
mod methods_texture;

use super::FrameHandle;
use mlua::UserDataMethods;

/// Register every frame method.
pub fn register_all_methods<M: UserDataMethods<FrameHandle>>(methods: &mut M) {
    methods_core::add_core_methods(methods);
    methods_hierarchy::add_hierarchy_methods(methods);
    methods_anchor::add_anchor_methods(methods);
    methods_texture::add_texture_methods(methods);
    methods_script::add_script_methods(methods);
}
