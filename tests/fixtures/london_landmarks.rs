//! Real central London locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Distances between these are the
//! sub-kilometre hops a walking tour of listed properties would make.

use tour_planner::Waypoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

pub const LANDMARKS: &[Location] = &[
    Location::new("Trafalgar Square", 51.5080, -0.1281),
    Location::new("Covent Garden", 51.5117, -0.1230),
    Location::new("British Museum", 51.5194, -0.1270),
    Location::new("St Paul's Cathedral", 51.5138, -0.0984),
    Location::new("Tower of London", 51.5081, -0.0759),
    Location::new("Westminster Abbey", 51.4993, -0.1273),
    Location::new("Buckingham Palace", 51.5014, -0.1419),
    Location::new("King's Cross Station", 51.5308, -0.1238),
];

/// Build waypoints from the first `n` landmarks, ids taken from the names.
pub fn waypoints(n: usize) -> Vec<Waypoint> {
    LANDMARKS
        .iter()
        .take(n)
        .map(|loc| Waypoint::new(loc.name, loc.lat, loc.lng))
        .collect()
}
