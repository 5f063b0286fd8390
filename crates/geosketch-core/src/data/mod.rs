//! Feature data model
//!
//! Geographic features as they live in the geometry store and as they are
//! exchanged with hosts: GeoJSON-shaped geometries keyed by a [`FeatureId`].

mod feature;

pub use feature::{Feature, FeatureCollection, FeatureId, Geometry, Properties};

/// A `[longitude, latitude]` pair.
pub type Position = [f64; 2];

/// Property key carrying the discriminator of the mode that drew a feature.
pub const MODE_PROPERTY: &str = "mode";
