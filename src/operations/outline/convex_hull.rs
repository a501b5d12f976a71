use tracing::warn;

use crate::math::polygon_2d::{orientation, Orientation};
use crate::math::Point2;

/// Reduces a hyperedge's members to the members on their convex hull.
///
/// Gift-wrapping (Jarvis march) over the member positions: starting from
/// the member with the smallest x (first occurrence wins ties), the next
/// hull member is the candidate with no other member strictly
/// counter-clockwise of the line from the current member to it. Among
/// colinear candidates in the same direction the farthest wins, so points
/// in the middle of a hull side are skipped and no corner is lost.
///
/// Member sets of 3 or fewer pass through unchanged.
#[derive(Debug)]
pub struct ConvexHull2D<'a> {
    positions: &'a [Point2],
    members: &'a [usize],
}

impl<'a> ConvexHull2D<'a> {
    /// Creates a hull reduction over `members`, which index into `positions`.
    #[must_use]
    pub fn new(positions: &'a [Point2], members: &'a [usize]) -> Self {
        Self { positions, members }
    }

    /// Executes the reduction, returning the hull members in walk order.
    ///
    /// The result is a subsequence of `members` (as a set) starting at the
    /// leftmost member. The walk visits each member at most once; if
    /// floating-point ties would lead it back to an already visited member
    /// other than the start, it stops there and returns the hull found so far.
    #[must_use]
    pub fn execute(&self) -> Vec<usize> {
        let n = self.members.len();
        if n <= 3 {
            return self.members.to_vec();
        }

        let point = |slot: usize| &self.positions[self.members[slot]];

        let mut start = 0;
        for slot in 1..n {
            if point(slot).x < point(start).x {
                start = slot;
            }
        }

        let mut visited = vec![false; n];
        let mut hull = Vec::with_capacity(n);
        let mut current = start;

        loop {
            visited[current] = true;
            hull.push(self.members[current]);

            let mut best = (current + 1) % n;
            for candidate in 0..n {
                if wraps_past(point(current), point(candidate), point(best)) {
                    best = candidate;
                }
            }

            // Close on the start when the walk reaches a copy of it, or when
            // the last side runs through a start that sits in the middle of
            // the leftmost side.
            if point(best) == point(start)
                || (visited[best] && lies_ahead(point(current), point(start), point(best)))
            {
                best = start;
            }

            if best == start {
                break;
            }
            if visited[best] {
                warn!(
                    members = n,
                    hull = hull.len(),
                    "convex hull walk revisited a member; stopping early"
                );
                break;
            }
            current = best;
        }

        hull
    }
}

/// Whether `candidate` should replace `best` as the next hull member after
/// `current`.
fn wraps_past(current: &Point2, candidate: &Point2, best: &Point2) -> bool {
    match orientation(current, candidate, best) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        Orientation::Colinear => {
            let to_candidate = candidate - current;
            let to_best = best - current;
            if to_candidate.dot(&to_best) < 0.0 {
                // Opposite sides of `current` only happens at a start in the
                // middle of the leftmost side, which the walk leaves downward.
                to_candidate.y < to_best.y
            } else {
                to_candidate.norm_squared() > to_best.norm_squared()
            }
        }
    }
}

/// Whether `p` lies on the segment from `from` to `to`, strictly past `from`.
fn lies_ahead(from: &Point2, p: &Point2, to: &Point2) -> bool {
    let to_p = p - from;
    let to_end = to - from;
    orientation(from, p, to) == Orientation::Colinear
        && to_p.dot(&to_end) > 0.0
        && to_p.norm_squared() <= to_end.norm_squared()
}
