//! Error handling for GeoSketch
//!
//! Provides error types for all layers of the library:
//! - Mode errors (lifecycle misuse, style assignment, mode lookup)
//! - Store errors (feature bookkeeping)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! A click rejected by the self-intersection guard is not an error; modes
//! silently ignore it.

use thiserror::Error;

use crate::data::FeatureId;

/// Store error type
///
/// Represents failures of the geometry store collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No feature with the given id exists in the store
    #[error("Feature {id} not found in store")]
    FeatureNotFound {
        /// The id that was looked up.
        id: FeatureId,
    },
}

/// Mode error type
///
/// Represents programmer or integration misuse of a drawing mode,
/// including lifecycle violations and malformed style assignments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModeError {
    /// Invalid lifecycle state transition
    #[error("Invalid state transition from {current} to {requested}")]
    InvalidStateTransition {
        /// The current state name.
        current: String,
        /// The requested state name.
        requested: String,
    },

    /// Style mapping was rejected
    #[error("Invalid style assignment: {reason}")]
    InvalidStyleAssignment {
        /// The reason the styles were rejected.
        reason: String,
    },

    /// No mode with this name is known to the host
    #[error("Unknown mode: {name}")]
    UnknownMode {
        /// The requested mode name.
        name: String,
    },

    /// Two modes share the same name
    #[error("Duplicate mode: {name}")]
    DuplicateMode {
        /// The conflicting mode name.
        name: String,
    },

    /// The geometry store refused an operation
    #[error(transparent)]
    Store(#[from] StoreError),
}
