use super::Attributes;

/// A hyperedge: an ordered list of vertex indices plus its per-edge style
/// overrides.
///
/// Indices refer into the owning [`super::Hypergraph`]'s vertex list. The
/// list may be empty and may repeat an index.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperedge {
    pub vertices: Vec<usize>,
    pub attributes: Attributes,
}

impl Hyperedge {
    /// Creates a hyperedge with no attributes.
    #[must_use]
    pub fn new(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            attributes: Attributes::new(),
        }
    }

    /// Replaces the edge attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
