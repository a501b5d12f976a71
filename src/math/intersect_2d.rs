use super::Point2;

/// Offset lines whose determinant falls below this value are treated as
/// parallel. The comparison is signed.
pub const NEAR_PARALLEL_DETERMINANT: f64 = 1e-4;

/// Intersects the infinite line through `o1, p1` with the line through `o2, p2`.
///
/// Each line is written as `a*x + b*y = c` with `a = o.y - p.y`,
/// `b = p.x - o.x`, `c = a*p.x + b*p.y`, and solved by Cramer's rule.
///
/// Returns `None` when the signed determinant `a1*b2 - a2*b1` is below
/// [`NEAR_PARALLEL_DETERMINANT`]. The division is never performed in that case.
#[must_use]
pub fn offset_line_intersection(
    o1: &Point2,
    p1: &Point2,
    o2: &Point2,
    p2: &Point2,
) -> Option<Point2> {
    let a1 = o1.y - p1.y;
    let b1 = p1.x - o1.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = o2.y - p2.y;
    let b2 = p2.x - o2.x;
    let c2 = a2 * p2.x + b2 * p2.y;

    let determinant = a1 * b2 - a2 * b1;
    if determinant < NEAR_PARALLEL_DETERMINANT {
        return None;
    }

    Some(Point2::new(
        (b2 * c1 - b1 * c2) / determinant,
        (a1 * c2 - a2 * c1) / determinant,
    ))
}
