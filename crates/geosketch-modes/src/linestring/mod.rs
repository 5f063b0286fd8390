//! Line string drawing mode.
//!
//! The first click anchors a line and places a preview vertex on top of the
//! anchor. Pointer moves drag the preview. Each further click confirms the
//! preview and starts a new one, until a click lands within the closing
//! distance of the last confirmed vertex: that click drops the preview and
//! finishes the line. The cancel key throws the line away.

mod session;

pub use session::DrawingSession;

use geosketch_core::data::MODE_PROPERTY;
use geosketch_core::{
    ChangeKind, Geometry, KeyEvent, ModeError, MouseButton, PointerEvent, Position, Properties,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, trace, warn};

use crate::closing::{is_closing_click, DEFAULT_POINTER_DISTANCE};
use crate::intersection::self_intersects;
use crate::lifecycle::{Lifecycle, ModeState};
use crate::mode::{DrawMode, ModeConfig};
use crate::styling::LineStringStyles;

/// Discriminator of the line string mode.
pub const LINE_STRING_MODE: &str = "linestring";

/// Key bindings of the line string mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEvents {
    pub cancel: String,
}

impl Default for KeyEvents {
    fn default() -> Self {
        Self {
            cancel: "Escape".to_string(),
        }
    }
}

/// Construction options of the line string mode
#[derive(Debug, Clone, PartialEq)]
pub struct LineStringOptions {
    /// When `false`, clicks that would make the line cross itself are ignored.
    pub allow_self_intersections: bool,
    /// Closing distance in pixels.
    pub pointer_distance: f64,
    pub key_events: KeyEvents,
    pub styles: LineStringStyles,
}

impl Default for LineStringOptions {
    fn default() -> Self {
        Self {
            allow_self_intersections: true,
            pointer_distance: DEFAULT_POINTER_DISTANCE,
            key_events: KeyEvents::default(),
            styles: LineStringStyles::default(),
        }
    }
}

/// Click-and-preview line drawing mode
#[derive(Debug)]
pub struct LineStringMode {
    lifecycle: Lifecycle,
    config: Option<ModeConfig>,
    allow_self_intersections: bool,
    pointer_distance: f64,
    key_events: KeyEvents,
    styles: LineStringStyles,
    session: Option<DrawingSession>,
}

impl Default for LineStringMode {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStringMode {
    pub fn new() -> Self {
        Self::with_options(LineStringOptions::default())
    }

    pub fn with_options(options: LineStringOptions) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            config: None,
            allow_self_intersections: options.allow_self_intersections,
            pointer_distance: options.pointer_distance,
            key_events: options.key_events,
            styles: options.styles,
            session: None,
        }
    }

    /// Direct state assignment is not allowed; always fails.
    pub fn set_state(&mut self, state: ModeState) -> Result<(), ModeError> {
        self.lifecycle.set_state(state)
    }

    pub fn allows_self_intersections(&self) -> bool {
        self.allow_self_intersections
    }

    pub fn pointer_distance(&self) -> f64 {
        self.pointer_distance
    }

    pub fn key_events(&self) -> &KeyEvents {
        &self.key_events
    }

    /// The line being drawn, if any.
    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    /// Registered collaborators while started, `None` otherwise.
    fn active_config(&mut self) -> Option<&mut ModeConfig> {
        if !self.lifecycle.is_started() {
            return None;
        }
        self.config.as_mut()
    }

    fn begin_line(&mut self, anchor: Position) -> Result<(), ModeError> {
        let Some(config) = self.active_config() else {
            return Ok(());
        };

        let coordinates = DrawingSession::initial_coordinates(anchor);
        let mut properties = Properties::new();
        properties.insert(
            MODE_PROPERTY.to_string(),
            Value::String(LINE_STRING_MODE.to_string()),
        );

        let id = config
            .store
            .borrow_mut()
            .create(Geometry::LineString(coordinates.clone()), properties);
        config.notify(id, ChangeKind::Create);
        debug!("started line {} at {:?}", id, anchor);

        self.session = Some(DrawingSession::new(id, coordinates));
        Ok(())
    }

    /// Writes `coordinates` to the store, notifies, and commits them to the
    /// session on success.
    fn write_coordinates(&mut self, coordinates: Vec<Position>) -> Result<(), ModeError> {
        let Some(id) = self.session.as_ref().map(DrawingSession::feature_id) else {
            return Ok(());
        };
        let Some(config) = self.active_config() else {
            return Ok(());
        };

        config
            .store
            .borrow_mut()
            .update_geometry(&id, Geometry::LineString(coordinates.clone()))?;
        config.notify(id, ChangeKind::Update);

        if let Some(session) = self.session.as_mut() {
            session.commit(coordinates);
        }
        Ok(())
    }

    fn is_closing(&self, session: &DrawingSession, event: &PointerEvent) -> bool {
        // a line needs two confirmed vertices before it can be finished
        if session.confirmed().len() < 2 {
            return false;
        }
        let Some(config) = self.config.as_ref() else {
            return false;
        };
        let last_vertex = config.project(session.last_confirmed());
        is_closing_click(event.screen(), last_vertex, self.pointer_distance)
    }

    fn delete_line(&mut self) -> Result<(), ModeError> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let Some(config) = self.config.as_mut() else {
            return Ok(());
        };

        let id = session.feature_id();
        config.store.borrow_mut().delete(&id)?;
        config.notify(id, ChangeKind::Delete);
        debug!("deleted unfinished line {}", id);
        Ok(())
    }
}

impl DrawMode for LineStringMode {
    fn mode(&self) -> &'static str {
        LINE_STRING_MODE
    }

    fn state(&self) -> ModeState {
        self.lifecycle.state()
    }

    fn register(&mut self, config: ModeConfig) -> Result<(), ModeError> {
        self.lifecycle.register()?;
        self.config = Some(config);
        Ok(())
    }

    fn start(&mut self) -> Result<(), ModeError> {
        self.lifecycle.start()
    }

    fn stop(&mut self) -> Result<(), ModeError> {
        self.lifecycle.stop()?;
        if let Some(session) = self.session.take() {
            debug!("abandoned line {} on stop", session.feature_id());
        }
        Ok(())
    }

    fn on_click(&mut self, event: &PointerEvent) -> Result<(), ModeError> {
        if !self.lifecycle.is_started() {
            trace!("linestring ignoring click while {}", self.lifecycle.state());
            return Ok(());
        }
        if event.button != MouseButton::Left {
            trace!("linestring ignoring {:?} button click", event.button);
            return Ok(());
        }

        let position = event.position();
        let Some(session) = self.session.as_ref() else {
            return self.begin_line(position);
        };

        if !self.allow_self_intersections && self_intersects(&session.with_candidate(position)) {
            debug!("rejected self-intersecting vertex {:?}", position);
            return Ok(());
        }

        if self.is_closing(session, event) {
            let id = session.feature_id();
            let coordinates = session.finished();
            let vertices = coordinates.len();
            self.write_coordinates(coordinates)?;
            self.session = None;
            info!("finished line {} with {} vertices", id, vertices);
            return Ok(());
        }

        let coordinates = session.appended(position);
        self.write_coordinates(coordinates)
    }

    fn on_mouse_move(&mut self, event: &PointerEvent) -> Result<(), ModeError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let coordinates = session.moved_to(event.position());
        self.write_coordinates(coordinates)
    }

    fn on_key_up(&mut self, event: &KeyEvent) -> Result<(), ModeError> {
        if !self.lifecycle.is_started() || event.key != self.key_events.cancel {
            return Ok(());
        }
        self.delete_line()
    }

    fn clean_up(&mut self) {
        if let Err(err) = self.delete_line() {
            warn!("linestring clean up could not delete feature: {}", err);
        }
    }

    fn styles(&self) -> Map<String, Value> {
        self.styles.to_map()
    }

    fn set_styles(&mut self, styles: Value) -> Result<(), ModeError> {
        self.styles = LineStringStyles::from_value(styles)?;
        Ok(())
    }
}
