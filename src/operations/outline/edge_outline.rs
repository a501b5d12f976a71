use tracing::debug;

use crate::error::Result;
use crate::geometry::{BoundaryPath, Circle};
use crate::math::polygon_2d::centroid;
use crate::math::Point2;
use crate::style::EdgeStyle;

use super::{AngularSort, BoundaryPath2D, ConvexHull2D};

/// The drawable shape of one hyperedge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeShape {
    /// The edge has no members; nothing is drawn.
    Empty,
    /// A single member, drawn as a circle of the draw radius around it.
    Circle(Circle),
    /// Two or more members, enclosed by an offset boundary.
    Path(BoundaryPath),
}

/// The result of outlining a hyperedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub shape: EdgeShape,
    /// Mean position of all members (before hull reduction). `None` for an
    /// empty edge.
    pub centroid: Option<Point2>,
}

/// Computes the outline of one hyperedge.
///
/// # Pipeline
///
/// 1. Reduce the members to their convex hull when the style enables it and
///    the edge has more than 3 members
/// 2. Take the centroid of all original members
/// 3. Order the remaining members by angle around that centroid
/// 4. Build the shape for the member count
#[derive(Debug)]
pub struct EdgeOutline<'a> {
    positions: &'a [Point2],
    members: &'a [usize],
    style: &'a EdgeStyle,
}

impl<'a> EdgeOutline<'a> {
    /// Creates an outline operation for `members`, which index into `positions`.
    #[must_use]
    pub fn new(positions: &'a [Point2], members: &'a [usize], style: &'a EdgeStyle) -> Self {
        Self {
            positions,
            members,
            style,
        }
    }

    /// Executes the outline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if the style's draw radius is not
    /// finite and positive.
    pub fn execute(&self) -> Result<Outline> {
        let Some(center) = centroid(self.members.iter().map(|&i| &self.positions[i])) else {
            return Ok(Outline {
                shape: EdgeShape::Empty,
                centroid: None,
            });
        };

        let working = if self.style.hull_enabled && self.members.len() > 3 {
            let hull = ConvexHull2D::new(self.positions, self.members).execute();
            debug!(
                members = self.members.len(),
                hull = hull.len(),
                "reduced edge to convex hull"
            );
            hull
        } else {
            self.members.to_vec()
        };

        let ordered = AngularSort::new(self.positions, center).execute(&working);

        let shape = match ordered.as_slice() {
            [] => EdgeShape::Empty,
            [only] => EdgeShape::Circle(Circle::new(self.positions[*only], self.style.draw_radius)),
            _ => {
                let loop_points = ordered.iter().map(|&i| self.positions[i]).collect();
                EdgeShape::Path(BoundaryPath2D::new(loop_points, self.style.draw_radius).execute()?)
            }
        };

        Ok(Outline {
            shape,
            centroid: Some(center),
        })
    }
}
