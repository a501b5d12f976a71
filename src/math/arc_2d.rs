/// Circular arc math in SVG endpoint form.
///
/// An SVG arc is given by its endpoints, a radius and two flags:
/// - `large_arc`: take the arc spanning more than pi
/// - `sweep`: travel in the direction of increasing angle
///
/// Angles follow the coordinate system as-is, so in y-down SVG space an
/// increasing angle appears clockwise on screen.
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// A circular arc in center form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep; positive for increasing angle.
    pub sweep: f64,
}

impl CenterArc {
    /// Converts an endpoint-form arc to center form (SVG 1.1, appendix F.6.5).
    ///
    /// Radii too small to span the chord are scaled up to exactly half the
    /// chord, as SVG renderers do. Returns `None` for a zero-length chord or a
    /// zero radius; such arcs draw nothing.
    #[must_use]
    pub fn from_endpoints(
        start: &Point2,
        end: &Point2,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        let half_chord: Vector2 = (start - end) * 0.5;
        let half_len_sq = half_chord.norm_squared();
        let mut r = radius.abs();
        if half_len_sq < TOLERANCE * TOLERANCE || r < TOLERANCE {
            return None;
        }

        let lambda = half_len_sq / (r * r);
        if lambda > 1.0 {
            r *= lambda.sqrt();
        }

        let radicand = ((r * r - half_len_sq) / half_len_sq).max(0.0);
        let sign = if large_arc == sweep { -1.0 } else { 1.0 };
        let coef = sign * radicand.sqrt();
        let center_prime = Vector2::new(coef * half_chord.y, -coef * half_chord.x);

        let midpoint = Point2::from((start.coords + end.coords) * 0.5);
        let center = midpoint + center_prime;

        let start_angle = (half_chord.y - center_prime.y).atan2(half_chord.x - center_prime.x);
        let end_angle = (-half_chord.y - center_prime.y).atan2(-half_chord.x - center_prime.x);

        let mut delta = end_angle - start_angle;
        if sweep && delta < 0.0 {
            delta += TAU;
        } else if !sweep && delta > 0.0 {
            delta -= TAU;
        }

        Some(Self {
            center,
            radius: r,
            start_angle,
            sweep: delta,
        })
    }

    /// Evaluates a point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_with_sweep_passes_left() {
        // (0, 3) -> (0, -3) with increasing angle: pi/2 -> pi -> 3pi/2.
        let arc = CenterArc::from_endpoints(
            &Point2::new(0.0, 3.0),
            &Point2::new(0.0, -3.0),
            3.0,
            false,
            true,
        )
        .unwrap();
        assert_relative_eq!(arc.center, Point2::origin(), epsilon = TOL);
        assert_relative_eq!(arc.radius, 3.0, epsilon = TOL);
        assert_relative_eq!(arc.sweep, PI, epsilon = TOL);
        assert_relative_eq!(arc.point_at(0.5), Point2::new(-3.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn semicircle_without_sweep_passes_right() {
        let arc = CenterArc::from_endpoints(
            &Point2::new(0.0, 3.0),
            &Point2::new(0.0, -3.0),
            3.0,
            false,
            false,
        )
        .unwrap();
        assert_relative_eq!(arc.sweep, -PI, epsilon = TOL);
        assert_relative_eq!(arc.point_at(0.5), Point2::new(3.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn quarter_arc_small_and_large() {
        // Endpoints (1, 0) and (0, 1) on the unit circle about the origin.
        let small = CenterArc::from_endpoints(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            1.0,
            false,
            true,
        )
        .unwrap();
        assert_relative_eq!(small.center, Point2::origin(), epsilon = 1e-9);
        assert_relative_eq!(small.sweep, FRAC_PI_2, epsilon = 1e-9);

        let large = CenterArc::from_endpoints(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            1.0,
            true,
            true,
        )
        .unwrap();
        assert_relative_eq!(large.center, Point2::new(1.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(large.sweep, 3.0 * FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(large.point_at(1.0), Point2::new(0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn undersized_radius_is_scaled() {
        let arc = CenterArc::from_endpoints(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            1.0,
            false,
            true,
        )
        .unwrap();
        assert_relative_eq!(arc.radius, 5.0, epsilon = 1e-9);
        assert_relative_eq!(arc.center, Point2::new(5.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn zero_chord_is_degenerate() {
        let p = Point2::new(2.0, 2.0);
        assert!(CenterArc::from_endpoints(&p, &p, 1.0, false, true).is_none());
    }

    #[test]
    fn subdivision_count_grows_with_precision() {
        let coarse = arc_subdivision_count(10.0, PI, 1.0);
        let fine = arc_subdivision_count(10.0, PI, 0.001);
        assert!(coarse >= 1);
        assert!(fine > coarse);
        assert_eq!(arc_subdivision_count(0.0, PI, 0.1), 1);
    }
}
