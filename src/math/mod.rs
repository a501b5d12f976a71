pub mod arc_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates a vector by 90 degrees: `(x, y) -> (-y, x)`.
#[must_use]
pub fn rot90(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v` scaled to unit length, or the zero vector when `v` is shorter
/// than [`TOLERANCE`].
///
/// Coincident vertices yield zero-length segments; their offsets collapse to
/// the vertex itself instead of propagating NaN through the path.
#[must_use]
pub fn unit_or_zero(v: Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// Heading of a vector in radians, in `(-pi, pi]`.
#[must_use]
pub fn heading(v: Vector2) -> f64 {
    v.y.atan2(v.x)
}
