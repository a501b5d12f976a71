use crate::math::arc_2d::{arc_subdivision_count, CenterArc};
use crate::math::Point2;

/// A single drawing command of a boundary path.
///
/// Commands are absolute and must be replayed in order; the order defines
/// the topology of the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts the outline at a point.
    MoveTo(Point2),
    /// Straight segment to a point.
    LineTo(Point2),
    /// Circular arc to `end` (SVG endpoint form).
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        end: Point2,
    },
}

impl PathCommand {
    /// Returns the point the pen rests on after this command.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
            Self::ArcTo { end, .. } => end,
        }
    }
}

/// A closed outline made of straight and circular-arc segments.
///
/// The first command is always the path's only [`PathCommand::MoveTo`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    commands: Vec<PathCommand>,
}

impl BoundaryPath {
    /// Creates a path whose pen starts at `start`.
    #[must_use]
    pub fn starting_at(start: Point2) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Appends a straight segment.
    pub fn line_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Appends a circular arc.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, end: Point2) {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            end,
        });
    }

    /// Returns the commands in emission order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the starting point of the path.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.commands[0].end_point()
    }

    /// Returns the point where the path ends.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.commands[self.commands.len() - 1].end_point()
    }

    /// Flattens the path into a polyline by tessellating arcs into chords.
    ///
    /// `tolerance` bounds the deviation between each arc and its chords.
    /// Degenerate arcs (zero-length chord) contribute only their endpoint.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.commands.len() * 2);
        let mut pen = self.start();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    end,
                } => {
                    if let Some(arc) = CenterArc::from_endpoints(&pen, &end, radius, large_arc, sweep) {
                        let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                        for j in 1..n_sub {
                            let t = f64::from(j) / f64::from(n_sub);
                            points.push(arc.point_at(t));
                        }
                    }
                    points.push(end);
                }
            }
            pen = command.end_point();
        }

        points
    }
}
