//! Closing click detection
//!
//! A click lands "on" the last confirmed vertex when its pixel distance to
//! that vertex's projected position is within the configured threshold.
//! Distances are measured on screen so the behaviour is independent of zoom.

use geosketch_core::ScreenPoint;

/// Default closing distance in pixels.
pub const DEFAULT_POINTER_DISTANCE: f64 = 40.0;

/// Returns `true` when `click` is within `pointer_distance` pixels of
/// `last_vertex` (inclusive).
pub fn is_closing_click(click: ScreenPoint, last_vertex: ScreenPoint, pointer_distance: f64) -> bool {
    click.distance_to(&last_vertex) <= pointer_distance
}
