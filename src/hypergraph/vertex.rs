use super::Attributes;
use crate::math::Point2;

/// A vertex of the hypergraph: a position in document space plus its
/// per-vertex style overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub position: Point2,
    pub attributes: Attributes,
}

impl Vertex {
    /// Creates a vertex with no attributes.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            attributes: Attributes::new(),
        }
    }

    /// Replaces the vertex attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
