//! Shared fixtures for mode tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use geosketch_core::{
    shared, ChangeKind, FeatureId, GeoJsonStore, GeometryStore, Position, Projector, ScreenPoint,
    Shared,
};
use geosketch_modes::{DrawMode, LineStringMode, LineStringOptions, ModeConfig};

/// Projector answering queued points first, then a fixed fallback.
#[derive(Debug, Default)]
pub struct QueuedProjector {
    queue: RefCell<VecDeque<ScreenPoint>>,
    fallback: ScreenPoint,
}

impl QueuedProjector {
    pub fn then(self, x: f64, y: f64) -> Self {
        self.queue.borrow_mut().push_back(ScreenPoint::new(x, y));
        self
    }
}

impl Projector for QueuedProjector {
    fn project(&self, _lng: f64, _lat: f64) -> ScreenPoint {
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

pub type ChangeLog = Rc<RefCell<Vec<(Vec<FeatureId>, ChangeKind)>>>;

pub struct Fixture {
    pub mode: LineStringMode,
    pub store: Shared<GeoJsonStore>,
    pub changes: ChangeLog,
}

impl Fixture {
    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn kinds(&self) -> Vec<ChangeKind> {
        self.changes.borrow().iter().map(|(_, kind)| *kind).collect()
    }

    pub fn feature_count(&self) -> usize {
        self.store.borrow().len()
    }

    /// Coordinates of the only stored feature.
    pub fn coordinates(&self) -> Vec<Position> {
        let features = self.store.borrow().copy_all();
        assert_eq!(features.len(), 1, "expected exactly one feature");
        features[0]
            .geometry
            .line_coordinates()
            .map(<[Position]>::to_vec)
            .unwrap_or_default()
    }
}

/// A registered (not started) line string mode.
pub fn registered(options: LineStringOptions, project: impl Projector + 'static) -> Fixture {
    let store = shared(GeoJsonStore::new());
    let changes: ChangeLog = Rc::new(RefCell::new(Vec::new()));
    let log = changes.clone();

    let mut mode = LineStringMode::with_options(options);
    mode.register(ModeConfig::new(
        store.clone(),
        project,
        move |ids: &[FeatureId], kind: ChangeKind| log.borrow_mut().push((ids.to_vec(), kind)),
    ))
    .unwrap();

    Fixture {
        mode,
        store,
        changes,
    }
}

/// A started line string mode.
pub fn started(options: LineStringOptions, project: impl Projector + 'static) -> Fixture {
    let mut fixture = registered(options, project);
    fixture.mode.start().unwrap();
    fixture
}
