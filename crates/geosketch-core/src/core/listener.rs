//! Change listener interface
//!
//! Defines the callback a mode invokes after it mutates the geometry store.

use serde::{Deserialize, Serialize};

use crate::data::FeatureId;

/// Kind of store mutation reported to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Listener for store changes made by a mode
///
/// Invoked exactly once per store mutation, after the mutation is applied.
/// Closures taking `(&[FeatureId], ChangeKind)` implement this trait.
pub trait ChangeListener {
    fn on_change(&mut self, ids: &[FeatureId], kind: ChangeKind);
}

impl<F> ChangeListener for F
where
    F: FnMut(&[FeatureId], ChangeKind),
{
    fn on_change(&mut self, ids: &[FeatureId], kind: ChangeKind) {
        self(ids, kind)
    }
}
