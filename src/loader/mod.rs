//! Scene loader: Lua files, XML files, or a directory of both.

mod helpers;
mod xml_file;
mod xml_frame;
mod xml_region;


use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::lua_api::WowLuaEnv;
use crate::{Error, Result};

pub use xml_file::{load_xml_file, load_xml_str};

/// What a scene load executed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// Number of Lua files executed (including `<Script>` includes)
    pub lua_files: usize,
    /// Number of XML files instantiated
    pub xml_files: usize,
    /// Number of top-level frames created from XML
    pub frames: usize,
}

impl LoadResult {
    fn merge(&mut self, other: LoadResult) {
        self.lua_files += other.lua_files;
        self.xml_files += other.xml_files;
        self.frames += other.frames;
    }
}

/// Load a scene into `env`.
///
/// `.lua` files are executed, `.xml` files instantiated. A directory is
/// walked in file name order and its XML files are loaded before its Lua
/// files, so scripts can reference frames the XML declares.
pub fn load_scene(env: &WowLuaEnv, path: &Path) -> Result<LoadResult> {
    let result = if path.is_dir() {
        load_directory(env, path)?
    } else {
        load_file(env, path)?
    };
    info!(
        scene = %path.display(),
        lua_files = result.lua_files,
        xml_files = result.xml_files,
        frames = result.frames,
        "scene loaded"
    );
    Ok(result)
}

fn load_file(env: &WowLuaEnv, path: &Path) -> Result<LoadResult> {
    match extension(path).as_deref() {
        Some("lua") => {
            load_lua_file(env, path)?;
            Ok(LoadResult { lua_files: 1, ..LoadResult::default() })
        }
        Some("xml") => load_xml_file(env, path),
        _ => Err(Error::UnsupportedScene(path.to_path_buf())),
    }
}

fn load_directory(env: &WowLuaEnv, dir: &Path) -> Result<LoadResult> {
    let mut xml_files = Vec::new();
    let mut lua_files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Other(format!("walking {}: {e}", dir.display())))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match extension(entry.path()).as_deref() {
            Some("xml") => xml_files.push(entry.into_path()),
            Some("lua") => lua_files.push(entry.into_path()),
            _ => debug!(path = %entry.path().display(), "skipping non-scene file"),
        }
    }

    let mut result = LoadResult::default();
    for path in &xml_files {
        result.merge(load_xml_file(env, path)?);
    }
    for path in &lua_files {
        result.merge(load_file(env, path)?);
    }
    Ok(result)
}

/// Execute a Lua file with its path as the chunk name.
pub fn load_lua_file(env: &WowLuaEnv, path: &Path) -> Result<()> {
    let code = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "executing Lua file");
    env.exec_named(&code, &format!("@{}", path.display()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase())
}
