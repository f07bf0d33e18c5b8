//! Haversine great-circle distance and walking-time estimation.
//!
//! Distances are straight-line over a spherical Earth (ignores streets) which
//! is accurate enough for ranking nearby candidates and quoting rough totals.

/// Average walking speed assumption for time estimation.
const DEFAULT_WALKING_SPEED_M_PER_HOUR: f64 = 5_000.0;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two (lat, lng) points in meters.
///
/// Haversine formula: `2 * R * asin(sqrt(sin²(dLat/2) +
/// cos(lat1) * cos(lat2) * sin²(dLng/2)))`. Exactly symmetric in its
/// arguments and zero for coincident points. Inputs are not validated:
/// out-of-range coordinates produce a finite but physically meaningless
/// result, and non-finite coordinates propagate through as non-finite.
pub fn great_circle_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Walking-speed assumption used to turn a tour distance into minutes.
///
/// The default matches a comfortable 5 km/h pace.
#[derive(Debug, Clone)]
pub struct WalkingPace {
    /// Assumed average speed in meters per hour.
    pub meters_per_hour: f64,
}

impl Default for WalkingPace {
    fn default() -> Self {
        Self {
            meters_per_hour: DEFAULT_WALKING_SPEED_M_PER_HOUR,
        }
    }
}

impl WalkingPace {
    pub fn new(meters_per_hour: f64) -> Self {
        Self { meters_per_hour }
    }

    /// Convert a distance in meters to whole minutes at this pace.
    ///
    /// Rounds half away from zero (`f64::round`), so 4.5 minutes becomes 5.
    /// Distances are expected to be non-negative (they come from
    /// [`tour_distance`](crate::planner::tour_distance)); a negative input
    /// saturates to 0 rather than panicking.
    pub fn minutes_for(&self, distance_meters: f64) -> u32 {
        let hours = distance_meters / self.meters_per_hour;
        (hours * 60.0).round() as u32
    }
}
