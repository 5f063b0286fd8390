//! # GeoSketch Core
//!
//! Core types, traits, and utilities for GeoSketch.
//! Provides the fundamental abstractions shared by every drawing mode:
//! the feature data model, the geometry store, screen projection,
//! input events and change notification.

pub mod core;
pub mod data;
pub mod error;
pub mod projection;
pub mod store;
pub mod types;

pub use self::core::{
    event::{KeyEvent, MouseButton, PointerEvent},
    listener::{ChangeKind, ChangeListener},
};

pub use data::{Feature, FeatureCollection, FeatureId, Geometry, Position, Properties};

pub use error::{ModeError, StoreError};

pub use projection::{LinearProjector, Projector, ScreenPoint, WebMercatorProjector};

pub use store::{GeoJsonStore, GeometryStore};

// Re-export type aliases for convenience
pub use types::{shared, shared_vec, ListenerList, Shared, SharedProjector, SharedStore, SharedVec};
