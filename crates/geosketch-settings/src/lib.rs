//! GeoSketch Settings Crate
//!
//! Loads, validates and saves the configuration that drawing modes are
//! built from.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, ConfigFormat, LineStringSettings, SketchConfig, APP_DIR, CONFIG_FILE,
};
pub use error::{Result, SettingsError};
