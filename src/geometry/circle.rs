use crate::math::Point2;

/// A full circle in the plane. Drawn for hyperedges with a single member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}
