//! Tour ordering planner (nearest-neighbor baseline).

use thiserror::Error;
use tracing::debug;

use crate::haversine::{great_circle_distance, WalkingPace};
use crate::traits::TourStop;

/// Errors from tour planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A stop's latitude or longitude was NaN or infinite. Planning over such
    /// a value would silently corrupt every distance comparison downstream,
    /// so it is rejected up front with the offending index.
    #[error("stop {index} has a non-finite coordinate ({lat}, {lng})")]
    NonFiniteCoordinate { index: usize, lat: f64, lng: f64 },
}

/// Order stops into a visiting sequence with a greedy nearest-neighbor walk.
///
/// Starting from `stops[start]` (out-of-bounds `start` is clamped to 0), the
/// planner repeatedly moves to the closest unvisited stop by great-circle
/// distance, breaking ties toward the lowest original index. The result
/// borrows the input: it is a permutation of the same stops, never copies,
/// and the input is not mutated.
///
/// This is a greedy O(N²) approximation, not an optimal tour. Tours are
/// human-curated (tens of stops, not thousands), where simplicity wins over
/// tour-length optimality; adversarial layouts can produce visibly
/// suboptimal routes.
///
/// # Errors
///
/// Returns [`PlanError::NonFiniteCoordinate`] if any stop has a NaN or
/// infinite coordinate. Out-of-range but finite coordinates are accepted and
/// yield numerically valid (if physically meaningless) distances.
pub fn order_tour<W: TourStop>(stops: &[W], start: usize) -> Result<Vec<&W>, PlanError> {
    for (index, stop) in stops.iter().enumerate() {
        let (lat, lng) = stop.location();
        if !lat.is_finite() || !lng.is_finite() {
            return Err(PlanError::NonFiniteCoordinate { index, lat, lng });
        }
    }

    if stops.is_empty() {
        return Ok(Vec::new());
    }

    let n = stops.len();
    let start = if start < n { start } else { 0 };

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut current = start;

    for _ in 0..n {
        visited[current] = true;
        order.push(&stops[current]);

        let here = stops[current].location();
        let mut best: Option<(usize, f64)> = None;
        // Ascending index scan keeps tie-breaking deterministic: the first
        // stop at the minimum distance wins.
        for (i, stop) in stops.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let dist = great_circle_distance(here, stop.location());
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((i, dist));
            }
        }

        match best {
            Some((i, _)) => current = i,
            None => break,
        }
    }

    debug!(stops = n, start, "ordered tour via nearest-neighbor");

    Ok(order)
}

/// Total great-circle distance in meters over consecutive pairs of an
/// already-ordered tour.
///
/// Returns 0 for fewer than two stops. The tour is one-way: the loop back to
/// the first stop is deliberately not included, matching the walking-tour
/// use case rather than a round trip.
pub fn tour_distance<W: TourStop>(stops: &[W]) -> f64 {
    stops
        .windows(2)
        .map(|pair| great_circle_distance(pair[0].location(), pair[1].location()))
        .sum()
}

/// Estimated walking time in whole minutes for a tour distance in meters,
/// at the default pace of [`WalkingPace`] (5 km/h).
///
/// Rounds half away from zero. Input is expected to be a [`tour_distance`]
/// result and therefore non-negative.
pub fn estimate_tour_time(distance_meters: f64) -> u32 {
    WalkingPace::default().minutes_for(distance_meters)
}
