//! Geographic to screen projection
//!
//! Modes never own a map engine; they receive a [`Projector`] at registration
//! and ask it where a stored vertex currently sits on screen. Closures of the
//! form `Fn(lng, lat) -> ScreenPoint` are projectors, which keeps test doubles
//! trivial. Two concrete projectors are provided for hosts without a map
//! engine: a plain linear scale and spherical Web Mercator.

use std::f64::consts::PI;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Pixel coordinates in the map container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels.
    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Maps a geographic coordinate to container pixels.
///
/// Must be deterministic for a fixed map view.
pub trait Projector {
    fn project(&self, lng: f64, lat: f64) -> ScreenPoint;
}

impl<F> Projector for F
where
    F: Fn(f64, f64) -> ScreenPoint,
{
    fn project(&self, lng: f64, lat: f64) -> ScreenPoint {
        self(lng, lat)
    }
}

impl<P: Projector + ?Sized> Projector for Rc<P> {
    fn project(&self, lng: f64, lat: f64) -> ScreenPoint {
        (**self).project(lng, lat)
    }
}

/// `x = lng * scale + offset_x`, `y = lat * scale + offset_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearProjector {
    pub scale: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
}

impl LinearProjector {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

impl Default for LinearProjector {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Projector for LinearProjector {
    fn project(&self, lng: f64, lat: f64) -> ScreenPoint {
        ScreenPoint::new(
            lng * self.scale + self.offset_x,
            lat * self.scale + self.offset_y,
        )
    }
}

/// Latitude limit of the square Web Mercator world.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Side length of one map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Spherical Web Mercator at a fixed zoom, origin at the world's top-left
/// corner (lng -180, lat ~85.05). Latitudes are clamped to the square world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WebMercatorProjector {
    pub zoom: f64,
}

impl WebMercatorProjector {
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }

    /// Width and height of the world in pixels at this zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }
}

impl Projector for WebMercatorProjector {
    fn project(&self, lng: f64, lat: f64) -> ScreenPoint {
        let size = self.world_size();
        let lat = lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
        let sin_lat = lat.to_radians().sin();

        let x = (lng + 180.0) / 360.0 * size;
        let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * size;
        ScreenPoint::new(x, y)
    }
}
