//! Waypoint value type for tour planning.
//!
//! This is the shape upstream listing services hand over: an opaque
//! identifier plus decimal-degree coordinates. The planner never interprets
//! the id; it exists so callers can correlate ordered output with their own
//! records.

use serde::{Deserialize, Serialize};

use crate::traits::TourStop;

/// A visitable location with a caller-supplied identifier.
///
/// Coordinates are not range-validated here: out-of-range but finite values
/// degrade to physically meaningless distances rather than errors, matching
/// the permissive policy of the planner. Duplicate coordinates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Opaque stable identifier, unique per planning call by caller contract.
    pub id: String,
    /// Latitude in decimal degrees, nominally [-90, 90].
    pub lat: f64,
    /// Longitude in decimal degrees, nominally [-180, 180].
    pub lng: f64,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }
}

impl TourStop for Waypoint {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
