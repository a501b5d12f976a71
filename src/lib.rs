pub mod document;
pub mod error;
pub mod geometry;
pub mod hypergraph;
pub mod math;
pub mod operations;
pub mod render;
pub mod style;

pub use document::Document;
pub use error::{HyperdrawError, Result};
pub use render::Renderer;
