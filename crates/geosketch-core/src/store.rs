//! Geometry store
//!
//! The store holds every feature drawn by any mode of a host. Modes only see
//! it through [`GeometryStore`]; [`GeoJsonStore`] is the in-memory
//! implementation used by the host facade and by tests.

use indexmap::IndexMap;
use tracing::trace;

use crate::data::{Feature, FeatureCollection, FeatureId, Geometry, Properties};
use crate::error::StoreError;

/// Feature bookkeeping used by drawing modes.
pub trait GeometryStore {
    /// Inserts a new feature and returns its generated id.
    fn create(&mut self, geometry: Geometry, properties: Properties) -> FeatureId;

    /// Replaces the geometry of an existing feature.
    fn update_geometry(&mut self, id: &FeatureId, geometry: Geometry) -> Result<(), StoreError>;

    /// Removes a feature.
    fn delete(&mut self, id: &FeatureId) -> Result<(), StoreError>;

    /// Returns a copy of a feature's geometry.
    fn get_geometry(&self, id: &FeatureId) -> Result<Geometry, StoreError>;

    /// Returns copies of all features in insertion order.
    fn copy_all(&self) -> Vec<Feature>;

    fn has(&self, id: &FeatureId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonStore {
    features: IndexMap<FeatureId, Feature>,
}

impl GeoJsonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a reference to a feature by id.
    pub fn get(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.get(id)
    }

    /// Iterates features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Removes every feature.
    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// Snapshot of the store as a GeoJSON feature collection.
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection::from(self.copy_all())
    }
}

impl GeometryStore for GeoJsonStore {
    fn create(&mut self, geometry: Geometry, properties: Properties) -> FeatureId {
        let id = FeatureId::new();
        self.features
            .insert(id, Feature::new(id, geometry, properties));
        trace!("store created feature {}", id);
        id
    }

    fn update_geometry(&mut self, id: &FeatureId, geometry: Geometry) -> Result<(), StoreError> {
        let feature = self
            .features
            .get_mut(id)
            .ok_or(StoreError::FeatureNotFound { id: *id })?;
        feature.geometry = geometry;
        Ok(())
    }

    fn delete(&mut self, id: &FeatureId) -> Result<(), StoreError> {
        trace!("store deleting feature {}", id);
        self.features
            .shift_remove(id)
            .map(|_| ())
            .ok_or(StoreError::FeatureNotFound { id: *id })
    }

    fn get_geometry(&self, id: &FeatureId) -> Result<Geometry, StoreError> {
        self.features
            .get(id)
            .map(|feature| feature.geometry.clone())
            .ok_or(StoreError::FeatureNotFound { id: *id })
    }

    fn copy_all(&self) -> Vec<Feature> {
        self.features.values().cloned().collect()
    }

    fn has(&self, id: &FeatureId) -> bool {
        self.features.contains_key(id)
    }

    fn len(&self) -> usize {
        self.features.len()
    }
}
