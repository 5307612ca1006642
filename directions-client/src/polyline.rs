//! Route geometry as decoded coordinate sequences.
//!
//! The directions API returns geometry in its compact encoded polyline
//! format. Decoding is done by a caller-supplied [`PolylineDecoder`]; this
//! crate only defines the boundary: an encoded string goes in, a
//! [`Polyline`] or a [`PolylineError`] comes out.

use serde::{Deserialize, Serialize};

/// Error returned by a decoder for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed polyline: {message}")]
pub struct PolylineError {
    pub message: String,
}

impl PolylineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A route geometry as decoded coordinates.
///
/// Each point is a `(latitude, longitude)` tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes the API's encoded polyline strings.
pub trait PolylineDecoder {
    fn decode(&self, encoded: &str) -> Result<Polyline, PolylineError>;
}

impl<F> PolylineDecoder for F
where
    F: Fn(&str) -> Result<Polyline, PolylineError>,
{
    fn decode(&self, encoded: &str) -> Result<Polyline, PolylineError> {
        self(encoded)
    }
}
