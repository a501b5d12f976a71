use super::{Point2, Vector2};

/// Rotational sense of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the triple `(p, q, r)` by the sign of `(q - p) x (r - q)`.
///
/// The comparison against zero is exact: nearly-colinear triples are
/// classified by whatever sign the subtraction happens to produce.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Colinear
    }
}

/// Arithmetic mean of a point set. Returns `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Point2> {
    let mut sum = Vector2::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Point2::from(sum / count as f64))
}
