//! The capability set shared by every drawing mode.

use std::rc::Rc;

use geosketch_core::{
    ChangeKind, ChangeListener, FeatureId, KeyEvent, ModeError, PointerEvent, Projector,
    ScreenPoint, SharedProjector, SharedStore,
};
use serde_json::{Map, Value};

use crate::lifecycle::ModeState;

/// Collaborators bound to a mode at registration.
pub struct ModeConfig {
    pub store: SharedStore,
    pub project: SharedProjector,
    pub on_change: Box<dyn ChangeListener>,
}

impl ModeConfig {
    pub fn new(
        store: SharedStore,
        project: impl Projector + 'static,
        on_change: impl ChangeListener + 'static,
    ) -> Self {
        Self {
            store,
            project: Rc::new(project),
            on_change: Box::new(on_change),
        }
    }

    /// Builds a config around an already shared projector.
    pub fn with_shared_projector(
        store: SharedStore,
        project: SharedProjector,
        on_change: impl ChangeListener + 'static,
    ) -> Self {
        Self {
            store,
            project,
            on_change: Box::new(on_change),
        }
    }

    pub fn project(&self, position: [f64; 2]) -> ScreenPoint {
        self.project.project(position[0], position[1])
    }

    pub fn notify(&mut self, id: FeatureId, kind: ChangeKind) {
        self.on_change.on_change(&[id], kind);
    }
}

impl std::fmt::Debug for ModeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeConfig")
            .field("features", &self.store.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A drawing mode driven by host events.
///
/// Handlers only act while the mode is started. Drag handlers exist for
/// modes that edit features; drawing modes leave them as no-ops.
pub trait DrawMode {
    /// Discriminator stored on features this mode draws.
    fn mode(&self) -> &'static str;

    fn state(&self) -> ModeState;

    fn register(&mut self, config: ModeConfig) -> Result<(), ModeError>;

    fn start(&mut self) -> Result<(), ModeError>;

    fn stop(&mut self) -> Result<(), ModeError>;

    fn on_click(&mut self, event: &PointerEvent) -> Result<(), ModeError>;

    fn on_mouse_move(&mut self, event: &PointerEvent) -> Result<(), ModeError>;

    fn on_key_up(&mut self, event: &KeyEvent) -> Result<(), ModeError>;

    fn on_drag(&mut self) {}

    fn on_drag_start(&mut self) {}

    fn on_drag_end(&mut self) {}

    /// Discards any in-progress feature. Never fails.
    fn clean_up(&mut self);

    fn styles(&self) -> Map<String, Value>;

    /// Replaces the styles, or leaves them untouched and fails with
    /// `InvalidStyleAssignment`.
    fn set_styles(&mut self, styles: Value) -> Result<(), ModeError>;
}
