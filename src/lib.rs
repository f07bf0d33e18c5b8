//! tour-planner core
//!
//! Orders geographic waypoints into a visiting sequence with a greedy
//! nearest-neighbor heuristic, and estimates tour length and walking time.

pub mod traits;
pub mod waypoint;
pub mod haversine;
pub mod planner;

pub use haversine::{great_circle_distance, WalkingPace};
pub use planner::{estimate_tour_time, order_tour, tour_distance, PlanError};
pub use traits::TourStop;
pub use waypoint::Waypoint;
