//! # GeoSketch
//!
//! Interactive drawing modes for map surfaces. A host map engine forwards
//! pointer and keyboard events; the active mode turns them into GeoJSON
//! features in a shared store.
//!
//! ## Architecture
//!
//! GeoSketch is organized as a workspace with multiple crates:
//!
//! 1. **geosketch-core** - Features, events, projection, the geometry store, errors
//! 2. **geosketch-modes** - Mode lifecycle, the line string mode, the `Sketcher` facade
//! 3. **geosketch-settings** - Configuration files and validation
//! 4. **geosketch** - Script replay and the command line entry point

pub mod script;

pub use geosketch_core::{
    ChangeKind, ChangeListener, Feature, FeatureCollection, FeatureId, GeoJsonStore,
    Geometry, GeometryStore, KeyEvent, LinearProjector, ModeError, PointerEvent, Position,
    Projector, ScreenPoint, StoreError, WebMercatorProjector,
};

pub use geosketch_modes::{
    DrawMode, KeyEvents, LineStringMode, LineStringOptions, LineStringStyles, ModeConfig,
    ModeState, Sketcher, StaticMode, LINE_STRING_MODE, STATIC_MODE,
};

pub use geosketch_settings::{default_config_path, LineStringSettings, SettingsError, SketchConfig};

pub use script::{ProjectorSpec, Script, ScriptEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty output on stderr, keeping stdout free for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
