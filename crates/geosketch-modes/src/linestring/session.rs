//! Coordinate buffer of the line being drawn.

use geosketch_core::{FeatureId, Position};

/// The in-progress line: confirmed vertices followed by one preview vertex.
///
/// Holds at least two coordinates at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    feature_id: FeatureId,
    coordinates: Vec<Position>,
}

impl DrawingSession {
    /// Initial buffer for a first click: anchor plus a preview on top of it.
    pub fn initial_coordinates(anchor: Position) -> Vec<Position> {
        vec![anchor, anchor]
    }

    pub fn new(feature_id: FeatureId, coordinates: Vec<Position>) -> Self {
        debug_assert!(coordinates.len() >= 2, "a session needs anchor and preview");
        Self {
            feature_id,
            coordinates,
        }
    }

    pub fn feature_id(&self) -> FeatureId {
        self.feature_id
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// Vertices the user has clicked, without the preview.
    pub fn confirmed(&self) -> &[Position] {
        &self.coordinates[..self.coordinates.len() - 1]
    }

    pub fn last_confirmed(&self) -> Position {
        self.coordinates[self.coordinates.len() - 2]
    }

    /// Confirmed vertices followed by `candidate`.
    pub fn with_candidate(&self, candidate: Position) -> Vec<Position> {
        let mut coordinates = self.confirmed().to_vec();
        coordinates.push(candidate);
        coordinates
    }

    /// Buffer after moving the preview to `position`.
    pub fn moved_to(&self, position: Position) -> Vec<Position> {
        let mut coordinates = self.coordinates.clone();
        if let Some(preview) = coordinates.last_mut() {
            *preview = position;
        }
        coordinates
    }

    /// Buffer after confirming `position` and starting a new preview on it.
    pub fn appended(&self, position: Position) -> Vec<Position> {
        let mut coordinates = self.moved_to(position);
        coordinates.push(position);
        coordinates
    }

    /// Buffer of the finished line: the preview vertex is dropped.
    pub fn finished(&self) -> Vec<Position> {
        self.confirmed().to_vec()
    }

    /// Commits a buffer previously derived from this session.
    pub fn commit(&mut self, coordinates: Vec<Position>) {
        debug_assert!(coordinates.len() >= 2, "a session needs anchor and preview");
        self.coordinates = coordinates;
    }
}
