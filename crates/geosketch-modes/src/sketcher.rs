//! Host facade
//!
//! `Sketcher` owns the feature store and the projector, registers every mode
//! against them, and forwards host events to whichever mode is active. Mode
//! notifications are fanned out to the listeners subscribed with
//! [`Sketcher::on_change`].

use std::rc::Rc;

use geosketch_core::{
    shared, shared_vec, ChangeKind, ChangeListener, Feature, FeatureCollection, FeatureId,
    GeoJsonStore, GeometryStore, KeyEvent, ListenerList, ModeError, PointerEvent, Projector,
    Shared, SharedProjector,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::lifecycle::ModeState;
use crate::mode::{DrawMode, ModeConfig};
use crate::static_mode::{StaticMode, STATIC_MODE};

/// Drives a set of drawing modes over one shared store.
pub struct Sketcher {
    store: Shared<GeoJsonStore>,
    project: SharedProjector,
    listeners: ListenerList,
    modes: IndexMap<&'static str, Box<dyn DrawMode>>,
    active: &'static str,
    enabled: bool,
}

impl Sketcher {
    /// Creates a sketcher holding only the static mode.
    pub fn new(project: impl Projector + 'static) -> Self {
        let mut modes: IndexMap<&'static str, Box<dyn DrawMode>> = IndexMap::new();
        modes.insert(STATIC_MODE, Box::new(StaticMode::new()));

        Self {
            store: shared(GeoJsonStore::new()),
            project: Rc::new(project),
            listeners: shared_vec(),
            modes,
            active: STATIC_MODE,
            enabled: false,
        }
    }

    /// Adds a mode. Must happen before [`start`](Self::start).
    pub fn add_mode(&mut self, mode: impl DrawMode + 'static) -> Result<(), ModeError> {
        let name = mode.mode();
        if self.modes.contains_key(name) {
            return Err(ModeError::DuplicateMode {
                name: name.to_string(),
            });
        }
        let mut mode: Box<dyn DrawMode> = Box::new(mode);
        if self.enabled {
            mode.register(self.config())?;
        }
        self.modes.insert(name, mode);
        Ok(())
    }

    fn config(&self) -> ModeConfig {
        mode_config(&self.store, &self.project, &self.listeners)
    }

    /// Registers every mode and starts the active one.
    pub fn start(&mut self) -> Result<(), ModeError> {
        if self.enabled {
            return Ok(());
        }
        for mode in self.modes.values_mut() {
            // modes survive a stop/start cycle registered
            if mode.state() == ModeState::Unregistered {
                mode.register(mode_config(&self.store, &self.project, &self.listeners))?;
            }
        }
        self.active_mode_mut()?.start()?;
        self.enabled = true;
        info!("sketcher started in {} mode", self.active);
        Ok(())
    }

    /// Cleans up and stops the active mode.
    pub fn stop(&mut self) -> Result<(), ModeError> {
        if !self.enabled {
            return Ok(());
        }
        let mode = self.active_mode_mut()?;
        mode.clean_up();
        mode.stop()?;
        self.enabled = false;
        info!("sketcher stopped");
        Ok(())
    }

    /// Switches the active mode, discarding any unfinished feature of the
    /// previous one.
    pub fn set_mode(&mut self, name: &str) -> Result<(), ModeError> {
        let Some((&next, _)) = self.modes.get_key_value(name) else {
            return Err(ModeError::UnknownMode {
                name: name.to_string(),
            });
        };
        if self.enabled {
            let current = self.active_mode_mut()?;
            current.clean_up();
            current.stop()?;
        }
        self.active = next;
        if self.enabled {
            self.active_mode_mut()?.start()?;
        }
        debug!("active mode is now {}", next);
        Ok(())
    }

    pub fn mode(&self) -> &'static str {
        self.active
    }

    pub fn mode_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modes.keys().copied()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Subscribes a listener to every store change made by any mode.
    pub fn on_change(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn on_click(&mut self, event: PointerEvent) -> Result<(), ModeError> {
        if !self.enabled {
            return Ok(());
        }
        self.active_mode_mut()?.on_click(&event)
    }

    pub fn on_mouse_move(&mut self, event: PointerEvent) -> Result<(), ModeError> {
        if !self.enabled {
            return Ok(());
        }
        self.active_mode_mut()?.on_mouse_move(&event)
    }

    pub fn on_key_up(&mut self, event: KeyEvent) -> Result<(), ModeError> {
        if !self.enabled {
            return Ok(());
        }
        self.active_mode_mut()?.on_key_up(&event)
    }

    pub fn on_drag(&mut self) -> Result<(), ModeError> {
        self.active_mode_mut()?.on_drag();
        Ok(())
    }

    pub fn on_drag_start(&mut self) -> Result<(), ModeError> {
        self.active_mode_mut()?.on_drag_start();
        Ok(())
    }

    pub fn on_drag_end(&mut self) -> Result<(), ModeError> {
        self.active_mode_mut()?.on_drag_end();
        Ok(())
    }

    /// Sets the styles of a named mode.
    pub fn set_mode_styles(&mut self, name: &str, styles: Value) -> Result<(), ModeError> {
        self.modes
            .get_mut(name)
            .ok_or_else(|| ModeError::UnknownMode {
                name: name.to_string(),
            })?
            .set_styles(styles)
    }

    /// Copies of all stored features.
    pub fn snapshot(&self) -> Vec<Feature> {
        self.store.borrow().copy_all()
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        self.store.borrow().to_collection()
    }

    fn active_mode_mut(&mut self) -> Result<&mut Box<dyn DrawMode>, ModeError> {
        let name = self.active;
        self.modes
            .get_mut(name)
            .ok_or_else(|| ModeError::UnknownMode {
                name: name.to_string(),
            })
    }
}

/// A registration config whose listener fans out to every host listener.
fn mode_config(
    store: &Shared<GeoJsonStore>,
    project: &SharedProjector,
    listeners: &ListenerList,
) -> ModeConfig {
    let listeners = listeners.clone();
    ModeConfig::with_shared_projector(
        store.clone(),
        project.clone(),
        move |ids: &[FeatureId], kind: ChangeKind| {
            for listener in listeners.borrow_mut().iter_mut() {
                listener.on_change(ids, kind);
            }
        },
    )
}

impl std::fmt::Debug for Sketcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketcher")
            .field("active", &self.active)
            .field("enabled", &self.enabled)
            .field("modes", &self.modes.keys().collect::<Vec<_>>())
            .field("features", &self.store.borrow().len())
            .finish()
    }
}
