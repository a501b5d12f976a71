mod circle;
mod path;

pub use circle::Circle;
pub use path::{BoundaryPath, PathCommand};
