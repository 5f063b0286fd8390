//! Input events delivered by the host
//!
//! The host map engine translates its native pointer and keyboard events into
//! these types and dispatches them synchronously to the active mode.

use serde::{Deserialize, Serialize};

use crate::data::Position;
use crate::projection::ScreenPoint;

/// Pointer button that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
    Neither,
}

/// A pointer event at a geographic location.
///
/// `container_x`/`container_y` are the pointer's pixel coordinates relative
/// to the map container, in the same space as [`crate::Projector`] output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub lng: f64,
    pub lat: f64,
    pub container_x: f64,
    pub container_y: f64,
    #[serde(default)]
    pub button: MouseButton,
    #[serde(default)]
    pub held_keys: Vec<String>,
}

impl PointerEvent {
    /// Creates a left-button event with no held keys.
    pub fn new(lng: f64, lat: f64, container_x: f64, container_y: f64) -> Self {
        Self {
            lng,
            lat,
            container_x,
            container_y,
            button: MouseButton::Left,
            held_keys: Vec::new(),
        }
    }

    /// Creates an event whose container coordinates equal its geographic ones.
    pub fn at(lng: f64, lat: f64) -> Self {
        Self::new(lng, lat, lng, lat)
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// The geographic position as `[lng, lat]`.
    pub fn position(&self) -> Position {
        [self.lng, self.lat]
    }

    /// The pointer's pixel position in the map container.
    pub fn screen(&self) -> ScreenPoint {
        ScreenPoint::new(self.container_x, self.container_y)
    }
}

/// A key released on the map container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
