//! Frame stack inspector for a simulated World of Warcraft UI.
//!
//! Embeds Lua 5.1 with a slice of the WoW widget API, loads scenes from
//! Lua and XML, and overlays depth-colored highlights plus a details panel
//! on the chain of frames under the cursor.

pub mod config;
pub mod dump;
pub mod error;
pub mod hit;
pub mod inspector;
pub mod layout;
pub mod loader;
pub mod lua_api;
pub mod widget;
pub mod xml;

pub use error::{Error, Result};
pub use layout::LayoutRect;
