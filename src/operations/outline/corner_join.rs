use std::f64::consts::{PI, TAU};

use crate::math::intersect_2d::offset_line_intersection;
use crate::math::{heading, rot90, unit_or_zero, Point2, Vector2};

/// Turn differences are scaled by this factor before testing `> pi`, so a
/// difference of exactly `+pi` wraps to `-pi`.
const WRAP_ABOVE_SCALE: f64 = 1.0001;

/// Turn differences are scaled by this factor before testing `< -pi`, so a
/// difference of exactly `-pi` stays put.
const WRAP_BELOW_SCALE: f64 = 0.99999;

/// How the offset boundary bends at a loop vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The boundary wraps around the vertex with a rounded arc.
    Convex,
    /// The offset lines cross before reaching the vertex; the boundary is
    /// mitered through their intersection.
    Reflex,
}

/// Classifies the turn between two outward offset vectors.
///
/// The heading difference `heading(incoming) - heading(outgoing)` is wrapped
/// into `[-pi, pi)`, with a small multiplicative slack at the boundary. A
/// positive difference is [`Turn::Reflex`]; zero, negative, and exact
/// half-turns (the ends of a two-member loop) are [`Turn::Convex`].
#[must_use]
pub fn classify_turn(incoming: Vector2, outgoing: Vector2) -> Turn {
    let mut angle = heading(incoming) - heading(outgoing);
    if WRAP_ABOVE_SCALE * angle > PI {
        angle -= TAU;
    } else if WRAP_BELOW_SCALE * angle < -PI {
        angle += TAU;
    }

    if angle > 0.0 {
        Turn::Reflex
    } else {
        Turn::Convex
    }
}

/// The boundary segment pair emitted at one loop vertex: a straight line to
/// `line_to` followed by an arc of the offset radius to `arc_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerJoin {
    pub turn: Turn,
    pub line_to: Point2,
    pub arc_end: Point2,
    pub large_arc: bool,
    pub sweep: bool,
}

impl CornerJoin {
    /// Builds the join at `b` for the loop fragment `a -> b -> c`.
    ///
    /// Offsets are `rot90(a - b)` and `rot90(b - c)` scaled to `radius`,
    /// which points outward for a counter-clockwise (y-up) loop.
    #[must_use]
    pub fn new(a: &Point2, b: &Point2, c: &Point2, radius: f64) -> Self {
        let offset_in = unit_or_zero(rot90(a - b)) * radius;
        let offset_out = unit_or_zero(rot90(b - c)) * radius;

        let p1 = b + offset_in;
        let p2 = b + offset_out;

        match classify_turn(offset_in, offset_out) {
            Turn::Reflex => {
                let o1 = a + offset_in;
                let o2 = c + offset_out;
                let intersect = offset_line_intersection(&o1, &p1, &o2, &p2)
                    .unwrap_or_else(|| Point2::from((p1.coords + p2.coords) * 0.5));

                // Reflect both offset endpoints through the intersection.
                let x1 = p1 + (intersect - p1) * 2.0;
                let x2 = p2 + (intersect - p2) * 2.0;

                Self {
                    turn: Turn::Reflex,
                    line_to: x1,
                    arc_end: x2,
                    large_arc: false,
                    sweep: false,
                }
            }
            Turn::Convex => {
                let span = heading(offset_out) - heading(offset_in);
                Self {
                    turn: Turn::Convex,
                    line_to: p1,
                    arc_end: p2,
                    large_arc: span >= PI,
                    sweep: true,
                }
            }
        }
    }
}
