//! Hyperedge outlines: hull reduction, angular ordering and the offset
//! boundary trace.

mod angular_sort;
mod boundary_path;
mod convex_hull;
mod corner_join;
mod edge_outline;

pub use angular_sort::AngularSort;
pub use boundary_path::BoundaryPath2D;
pub use convex_hull::ConvexHull2D;
pub use corner_join::{classify_turn, CornerJoin, Turn};
pub use edge_outline::{EdgeOutline, EdgeShape, Outline};
