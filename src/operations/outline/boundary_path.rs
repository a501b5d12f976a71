use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::BoundaryPath;
use crate::math::Point2;

use super::corner_join::CornerJoin;

/// Traces the closed outline of a vertex loop offset outward by a radius.
///
/// A window of three consecutive loop vertices `(a, b, c)` slides around the
/// loop using modular indexing. The first window only places the pen at
/// the end of its arc; every later window emits a [`CornerJoin`] as a line
/// plus an arc. The walk runs `n + 1` windows, so the first window is
/// visited again at the end and the path closes on its starting point.
///
/// A two-vertex loop `[A, B]` yields the windows `(A, B, A)`, `(B, A, B)`,
/// `(A, B, A)`: a capsule around the segment.
#[derive(Debug)]
pub struct BoundaryPath2D {
    points: Vec<Point2>,
    radius: f64,
}

impl BoundaryPath2D {
    /// Creates a boundary trace for the ordered loop `points`.
    #[must_use]
    pub fn new(points: Vec<Point2>, radius: f64) -> Self {
        Self { points, radius }
    }

    /// Executes the trace.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 2 points are provided
    /// - `GeometryError::InvalidRadius` if the radius is not finite and positive
    pub fn execute(&self) -> Result<BoundaryPath> {
        let n = self.points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "at least 2 points are required for a boundary path, got {n}"
            ))
            .into());
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(self.radius).into());
        }

        let join_at = |k: usize| {
            CornerJoin::new(
                &self.points[k % n],
                &self.points[(k + 1) % n],
                &self.points[(k + 2) % n],
                self.radius,
            )
        };

        let mut path = BoundaryPath::starting_at(join_at(0).arc_end);
        for k in 1..=n {
            let join = join_at(k);
            path.line_to(join.line_to);
            path.arc_to(self.radius, join.large_arc, join.sweep, join.arc_end);
        }

        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PathCommand;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn arc_sweeps(path: &BoundaryPath) -> Vec<bool> {
        path.commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { sweep, .. } => Some(*sweep),
                _ => None,
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn regular_polygon(n: usize, radius: f64) -> Vec<Point2> {
        (0..n)
            .map(|i| {
                let t = TAU * i as f64 / n as f64;
                Point2::new(radius * t.cos(), radius * t.sin())
            })
            .collect()
    }

    #[test]
    fn capsule_around_two_points() {
        let r = 3.0;
        let path = BoundaryPath2D::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)], r)
            .execute()
            .unwrap();

        let commands = path.commands();
        assert_eq!(commands.len(), 5);
        assert_relative_eq!(path.start(), Point2::new(10.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(path.end(), path.start(), epsilon = 1e-12);

        let points = path.to_points(1e-4);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert_relative_eq!(max_y, r, epsilon = 1e-9);
        assert_relative_eq!(min_y, -r, epsilon = 1e-9);
        assert_relative_eq!(max_x, 10.0 + r, epsilon = 1e-3);
        assert_relative_eq!(min_x, -r, epsilon = 1e-3);

        // Mirror-symmetric about the segment's perpendicular bisector.
        assert_relative_eq!(max_x + min_x, 10.0, epsilon = 2e-3);
    }

    #[test]
    fn regular_polygon_has_only_convex_joins() {
        for n in [3usize, 5, 6, 12] {
            let loop_points = regular_polygon(n, 50.0);
            let path = BoundaryPath2D::new(loop_points.clone(), 8.0).execute().unwrap();

            let sweeps = arc_sweeps(&path);
            assert_eq!(sweeps.len(), n);
            assert!(sweeps.iter().all(|&s| s), "reflex join in {n}-gon");
            assert_eq!(path.commands().len(), 2 * n + 1);
            assert_relative_eq!(path.end(), path.start(), epsilon = 1e-9);

            // Every flattened point lies at least the radius away from the loop
            // center's inscribed circle.
            for p in path.to_points(1e-3) {
                let nearest = loop_points
                    .iter()
                    .map(|v| (p - v).norm())
                    .fold(f64::INFINITY, f64::min);
                assert!(nearest >= 8.0 - 1e-6);
            }
        }
    }

    #[test]
    fn notched_loop_has_one_reflex_join() {
        let loop_points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let path = BoundaryPath2D::new(loop_points, 0.5).execute().unwrap();
        let sweeps = arc_sweeps(&path);
        assert_eq!(sweeps.len(), 5);
        assert_eq!(sweeps.iter().filter(|&&s| !s).count(), 1);
    }

    #[test]
    fn colinear_loop_stays_finite() {
        let loop_points = vec![
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let path = BoundaryPath2D::new(loop_points, 2.0).execute().unwrap();
        for c in path.commands() {
            let p = c.end_point();
            assert!(p.x.is_finite() && p.y.is_finite());
        }
        assert_relative_eq!(path.end(), path.start(), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_stay_finite() {
        let p = Point2::new(1.0, 1.0);
        let path = BoundaryPath2D::new(vec![p, p, Point2::new(4.0, 1.0)], 1.0)
            .execute()
            .unwrap();
        assert!(path
            .commands()
            .iter()
            .all(|c| c.end_point().x.is_finite() && c.end_point().y.is_finite()));
    }

    #[test]
    fn rejects_single_point() {
        let result = BoundaryPath2D::new(vec![Point2::origin()], 1.0).execute();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_bad_radius() {
        let pts = vec![Point2::origin(), Point2::new(1.0, 0.0)];
        assert!(BoundaryPath2D::new(pts.clone(), 0.0).execute().is_err());
        assert!(BoundaryPath2D::new(pts.clone(), -1.0).execute().is_err());
        assert!(BoundaryPath2D::new(pts, f64::NAN).execute().is_err());
    }
}
