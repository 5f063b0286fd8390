//! Replayable event scripts
//!
//! A script names a projector and a list of host events. Replaying it runs the
//! events through a [`Sketcher`] and yields the features left in the store.
//!
//! ```toml
//! mode = "linestring"
//!
//! [projector]
//! kind = "linear"
//! scale = 1000.0
//!
//! [[events]]
//! type = "click"
//! lng = 0.0
//! lat = 0.0
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use geosketch_core::{
    FeatureCollection, KeyEvent, LinearProjector, PointerEvent, Projector, SharedProjector,
    WebMercatorProjector,
};
use geosketch_modes::{LineStringMode, Sketcher, LINE_STRING_MODE};
use geosketch_settings::SketchConfig;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, info};

/// Projector a script is replayed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectorSpec {
    Linear {
        scale: f64,
        #[serde(default)]
        offset_x: f64,
        #[serde(default)]
        offset_y: f64,
    },
    WebMercator {
        zoom: f64,
    },
}

impl Default for ProjectorSpec {
    fn default() -> Self {
        Self::Linear {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ProjectorSpec {
    pub fn build(&self) -> SharedProjector {
        match *self {
            Self::Linear {
                scale,
                offset_x,
                offset_y,
            } => Rc::new(LinearProjector::new(scale).with_offset(offset_x, offset_y)),
            Self::WebMercator { zoom } => Rc::new(WebMercatorProjector::new(zoom)),
        }
    }
}

/// One host event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Click {
        lng: f64,
        lat: f64,
        #[serde(default)]
        container_x: Option<f64>,
        #[serde(default)]
        container_y: Option<f64>,
    },
    Move {
        lng: f64,
        lat: f64,
        #[serde(default)]
        container_x: Option<f64>,
        #[serde(default)]
        container_y: Option<f64>,
    },
    KeyUp {
        key: String,
    },
    Mode {
        name: String,
    },
    Drag,
    DragStart,
    DragEnd,
}

/// Pointer event with container coordinates projected where not given.
fn pointer(
    project: &dyn Projector,
    lng: f64,
    lat: f64,
    container_x: Option<f64>,
    container_y: Option<f64>,
) -> PointerEvent {
    let projected = project.project(lng, lat);
    PointerEvent::new(
        lng,
        lat,
        container_x.unwrap_or(projected.x),
        container_y.unwrap_or(projected.y),
    )
}

fn default_mode() -> String {
    LINE_STRING_MODE.to_string()
}

/// A projector plus the events to replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub projector: ProjectorSpec,
    /// Mode active when the first event is replayed
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Reads a JSON or TOML script, picked by extension.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON script {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML script {}", path.display()))?,
            _ => bail!("Script file must be .json or .toml: {}", path.display()),
        };
        Ok(script)
    }

    /// Replays every event and returns the resulting features.
    pub fn run(&self, config: &SketchConfig) -> anyhow::Result<FeatureCollection> {
        let project = self.projector.build();
        let options = config.linestring.to_options()?;

        let mut sketcher = Sketcher::new(project.clone());
        sketcher.add_mode(LineStringMode::with_options(options))?;
        sketcher.start()?;
        sketcher.set_mode(&self.mode)?;

        for (index, event) in self.events.iter().enumerate() {
            debug!("event {}: {:?}", index, event);
            match event {
                ScriptEvent::Click {
                    lng,
                    lat,
                    container_x,
                    container_y,
                } => sketcher.on_click(pointer(
                    project.as_ref(),
                    *lng,
                    *lat,
                    *container_x,
                    *container_y,
                ))?,
                ScriptEvent::Move {
                    lng,
                    lat,
                    container_x,
                    container_y,
                } => sketcher.on_mouse_move(pointer(
                    project.as_ref(),
                    *lng,
                    *lat,
                    *container_x,
                    *container_y,
                ))?,
                ScriptEvent::KeyUp { key } => sketcher.on_key_up(KeyEvent::new(key.as_str()))?,
                ScriptEvent::Mode { name } => sketcher.set_mode(name)?,
                ScriptEvent::Drag => sketcher.on_drag()?,
                ScriptEvent::DragStart => sketcher.on_drag_start()?,
                ScriptEvent::DragEnd => sketcher.on_drag_end()?,
            }
        }

        let collection = sketcher.to_feature_collection();
        info!(
            "replayed {} events into {} features",
            self.events.len(),
            collection.features.len()
        );
        Ok(collection)
    }
}
