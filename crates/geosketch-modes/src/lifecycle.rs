//! Mode lifecycle state machine
//!
//! Every mode moves `Unregistered -> Registered -> Started <-> Stopped`.
//! All transitions go through [`Lifecycle::transition`]; there is no other
//! way to change the state.

use geosketch_core::ModeError;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeState {
    #[default]
    Unregistered,
    Registered,
    Started,
    Stopped,
}

impl ModeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unregistered => "unregistered",
            Self::Registered => "registered",
            Self::Started => "started",
            Self::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for ModeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guarded holder of a mode's [`ModeState`]
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: ModeState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModeState {
        self.state
    }

    /// Whether `from -> to` is a legal transition.
    ///
    /// Registration happens exactly once. Starting and stopping are allowed
    /// from any registered state, including repeats.
    pub fn can_transition(from: ModeState, to: ModeState) -> bool {
        use ModeState::*;
        matches!(
            (from, to),
            (Unregistered, Registered)
                | (Registered | Started | Stopped, Started)
                | (Registered | Started | Stopped, Stopped)
        )
    }

    /// Moves to `requested` or fails with `InvalidStateTransition`.
    pub fn transition(&mut self, requested: ModeState) -> Result<(), ModeError> {
        if !Self::can_transition(self.state, requested) {
            return Err(ModeError::InvalidStateTransition {
                current: self.state.to_string(),
                requested: requested.to_string(),
            });
        }
        tracing::debug!("mode lifecycle {} -> {}", self.state, requested);
        self.state = requested;
        Ok(())
    }

    pub fn register(&mut self) -> Result<(), ModeError> {
        self.transition(ModeState::Registered)
    }

    pub fn start(&mut self) -> Result<(), ModeError> {
        self.transition(ModeState::Started)
    }

    pub fn stop(&mut self) -> Result<(), ModeError> {
        self.transition(ModeState::Stopped)
    }

    /// Rejects direct assignment of the state.
    ///
    /// Always returns `InvalidStateTransition`; use [`register`](Self::register),
    /// [`start`](Self::start) or [`stop`](Self::stop) instead.
    pub fn set_state(&mut self, requested: ModeState) -> Result<(), ModeError> {
        Err(ModeError::InvalidStateTransition {
            current: self.state.to_string(),
            requested: format!("{} (direct assignment)", requested),
        })
    }

    pub fn is_started(&self) -> bool {
        self.state == ModeState::Started
    }
}
