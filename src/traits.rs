//! Core domain traits for the tour planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

/// Anything with a geographic position that can be placed on a tour.
///
/// The planner only ever reads the position; identity, naming, and any other
/// caller data stay on the implementing type and travel with it unchanged.
pub trait TourStop {
    /// Location coordinates (lat, lng) in decimal degrees.
    fn location(&self) -> (f64, f64);
}

/// Bare coordinate pairs are valid stops.
impl TourStop for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

impl<T: TourStop + ?Sized> TourStop for &T {
    fn location(&self) -> (f64, f64) {
        (**self).location()
    }
}
