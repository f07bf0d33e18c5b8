//! Test fixtures for tour-planner.
//!
//! Provides real London locations for realistic tour inputs.

pub mod london_landmarks;

pub use london_landmarks::*;
