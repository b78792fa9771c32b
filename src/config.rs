//! Inspector configuration persistence.
//!
//! Stored as JSON at `~/.local/share/wow-fstack/config.json`. Missing fields
//! take their defaults, so an empty object is a valid config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::hit::HitTestOptions;
use crate::inspector::{DepthPolicy, SampleOptions};
use crate::widget::Color;

/// Upper bound on `max_depth`; the highlight pool is allocated up front.
pub const MAX_DEPTH_LIMIT: usize = 32;

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wow-fstack")
        .join("config.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub depth_policy: DepthPolicy,
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default)]
    pub show_regions: bool,
    /// Highlight color per depth, cycled when shorter than `max_depth`.
    #[serde(default = "default_depth_colors")]
    pub depth_colors: Vec<Color>,
    /// Gap between the cursor and the details panel, in pixels.
    #[serde(default = "default_panel_offset")]
    pub panel_offset: f32,
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    #[serde(default = "default_screen_height")]
    pub screen_height: f32,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_max_depth() -> usize { 5 }
fn default_panel_offset() -> f32 { 16.0 }
fn default_screen_width() -> f32 { 1024.0 }
fn default_screen_height() -> f32 { 768.0 }

fn default_depth_colors() -> Vec<Color> {
    vec![
        Color::new(0.0, 1.0, 0.0, 0.35),
        Color::new(0.0, 0.6, 1.0, 0.30),
        Color::new(1.0, 0.8, 0.0, 0.25),
        Color::new(1.0, 0.4, 0.0, 0.20),
        Color::new(0.8, 0.2, 1.0, 0.15),
    ]
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            depth_policy: DepthPolicy::default(),
            show_hidden: false,
            show_regions: false,
            depth_colors: default_depth_colors(),
            panel_offset: default_panel_offset(),
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            path: default_path(),
        }
    }
}

impl InspectorConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(path = %path.display(), "using default inspector config: {e}");
                Self { path, ..Self::default() }
            }
        }
    }

    /// Load from an explicit path. Unlike [`load`](Self::load), errors are returned.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.path = path.to_path_buf();
        Ok(config.normalized())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Persist current config to its path.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Clamp `max_depth` into `1..=MAX_DEPTH_LIMIT`.
    pub fn normalized(mut self) -> Self {
        self.max_depth = self.max_depth.clamp(1, MAX_DEPTH_LIMIT);
        self
    }

    pub fn hit_options(&self) -> HitTestOptions {
        HitTestOptions { show_hidden: self.show_hidden, show_regions: self.show_regions }
    }

    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions {
            max_depth: self.max_depth.clamp(1, MAX_DEPTH_LIMIT),
            policy: self.depth_policy,
            hit: self.hit_options(),
        }
    }
}
