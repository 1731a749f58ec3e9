// SPDX-License-Identifier: MPL-2.0
//! This module handles the editor configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use productify_canvas::config::{self, Config, EditorSettings};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.snap_tolerance = Some(4.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve into validated editor settings
//! let settings = EditorSettings::from_config(&config);
//! assert_eq!(settings.snap_tolerance.value(), 4.0);
//! ```

pub mod defaults;

use crate::domain::editing::{FpsWindow, HistoryLimit, SnapTolerance, ZoomRange, ZoomStep};
use crate::error::Result;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ProductifyCanvas";

/// User-editable editor preferences. Unset fields use the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub min_zoom: Option<f64>,
    #[serde(default)]
    pub max_zoom: Option<f64>,
    #[serde(default)]
    pub zoom_step: Option<f64>,
    #[serde(default)]
    pub history_limit: Option<usize>,
    #[serde(default)]
    pub snap_enabled: Option<bool>,
    #[serde(default)]
    pub snap_tolerance: Option<f64>,
    #[serde(default)]
    pub handle_radius: Option<f64>,
    #[serde(default)]
    pub default_layer_width: Option<f64>,
    #[serde(default)]
    pub default_layer_height: Option<f64>,
    #[serde(default)]
    pub fps_window: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_zoom: Some(defaults::DEFAULT_MIN_ZOOM),
            max_zoom: Some(defaults::DEFAULT_MAX_ZOOM),
            zoom_step: Some(defaults::DEFAULT_ZOOM_STEP),
            history_limit: Some(defaults::DEFAULT_HISTORY_LIMIT),
            snap_enabled: Some(true),
            snap_tolerance: Some(defaults::DEFAULT_SNAP_TOLERANCE),
            handle_radius: Some(defaults::DEFAULT_HANDLE_RADIUS),
            default_layer_width: Some(defaults::DEFAULT_LAYER_WIDTH),
            default_layer_height: Some(defaults::DEFAULT_LAYER_HEIGHT),
            fps_window: Some(defaults::DEFAULT_FPS_WINDOW),
        }
    }
}

/// Validated settings consumed by the editor state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    pub zoom_range: ZoomRange,
    pub zoom_step: ZoomStep,
    pub history_limit: HistoryLimit,
    pub snap_enabled: bool,
    pub snap_tolerance: SnapTolerance,
    /// Resize handle hit radius in screen pixels.
    pub handle_radius: f64,
    /// Size of layers created with a click rather than a drag.
    pub default_layer_size: Size,
    pub fps_window: FpsWindow,
}

impl EditorSettings {
    /// Resolves a [`Config`], replacing missing or invalid values by defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let positive = |value: Option<f64>, fallback: f64| {
            value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
        };

        Self {
            zoom_range: ZoomRange::new(
                config.min_zoom.unwrap_or(defaults::DEFAULT_MIN_ZOOM),
                config.max_zoom.unwrap_or(defaults::DEFAULT_MAX_ZOOM),
            ),
            zoom_step: config.zoom_step.map(ZoomStep::new).unwrap_or_default(),
            history_limit: config
                .history_limit
                .map(HistoryLimit::new)
                .unwrap_or_default(),
            snap_enabled: config.snap_enabled.unwrap_or(true),
            snap_tolerance: config
                .snap_tolerance
                .map(SnapTolerance::new)
                .unwrap_or_default(),
            handle_radius: positive(config.handle_radius, defaults::DEFAULT_HANDLE_RADIUS),
            default_layer_size: Size::new(
                positive(config.default_layer_width, defaults::DEFAULT_LAYER_WIDTH),
                positive(config.default_layer_height, defaults::DEFAULT_LAYER_HEIGHT),
            ),
            fps_window: config.fps_window.map(FpsWindow::new).unwrap_or_default(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a config file. Unparseable TOML yields the defaults with a warning.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
