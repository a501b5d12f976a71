use crate::math::{heading, Point2};

/// Orders members by the angle of their offset from a center point.
///
/// Angles are `atan2` headings in `(-pi, pi]`, sorted ascending. In a y-up
/// frame this is a counter-clockwise traversal; in SVG's y-down frame it
/// appears clockwise. The sort is stable, so members at equal angles
/// (coincident positions) keep their relative order.
#[derive(Debug)]
pub struct AngularSort<'a> {
    positions: &'a [Point2],
    center: Point2,
}

impl<'a> AngularSort<'a> {
    /// Creates a sort around `center` over members indexing into `positions`.
    #[must_use]
    pub fn new(positions: &'a [Point2], center: Point2) -> Self {
        Self { positions, center }
    }

    /// Returns `members` reordered by ascending angle around the center.
    #[must_use]
    pub fn execute(&self, members: &[usize]) -> Vec<usize> {
        let mut keyed: Vec<(f64, usize)> = members
            .iter()
            .map(|&i| (heading(self.positions[i] - self.center), i))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, i)| i).collect()
    }
}
