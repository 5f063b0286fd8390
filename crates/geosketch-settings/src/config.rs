//! Configuration file handling
//!
//! A `SketchConfig` is read from and written to JSON or TOML, picked by the
//! file extension, and validated on both paths.

use std::path::{Path, PathBuf};

use geosketch_modes::{KeyEvents, LineStringOptions, LineStringStyles};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SettingsError};

/// Application directory under the platform config dir.
pub const APP_DIR: &str = "geosketch";

/// Default config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// File formats a config can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Line string mode settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStringSettings {
    /// Allow clicks that make the line cross itself
    pub allow_self_intersections: bool,
    /// Screen distance that counts as a closing click
    pub closing_distance_pixels: f64,
    /// Key that throws away the line being drawn
    pub cancel_key: String,
    /// Style mapping, validated against the line string style keys
    pub styles: Map<String, Value>,
}

impl Default for LineStringSettings {
    fn default() -> Self {
        let options = LineStringOptions::default();
        Self {
            allow_self_intersections: options.allow_self_intersections,
            closing_distance_pixels: options.pointer_distance,
            cancel_key: options.key_events.cancel,
            styles: Map::new(),
        }
    }
}

impl LineStringSettings {
    pub fn validate(&self) -> Result<()> {
        self.to_options().map(|_| ())
    }

    /// Construction options for a `LineStringMode`.
    pub fn to_options(&self) -> Result<LineStringOptions> {
        if !self.closing_distance_pixels.is_finite() || self.closing_distance_pixels <= 0.0 {
            return Err(SettingsError::invalid(
                "closing_distance_pixels",
                format!("must be > 0, got {}", self.closing_distance_pixels),
            ));
        }
        if self.cancel_key.trim().is_empty() {
            return Err(SettingsError::invalid("cancel_key", "must not be empty"));
        }
        let styles = LineStringStyles::from_value(Value::Object(self.styles.clone()))
            .map_err(|e| SettingsError::invalid("styles", e.to_string()))?;

        Ok(LineStringOptions {
            allow_self_intersections: self.allow_self_intersections,
            pointer_distance: self.closing_distance_pixels,
            key_events: KeyEvents {
                cancel: self.cancel_key.clone(),
            },
            styles,
        })
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub linestring: LineStringSettings,
}

impl SketchConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("cannot write {}: {}", path.display(), e))
        })?;

        debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.linestring.validate()
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// `<config_dir>/geosketch/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| {
        SettingsError::LoadError("Could not determine config directory".to_string())
    })?;
    Ok(dir.join(APP_DIR).join(CONFIG_FILE))
}
