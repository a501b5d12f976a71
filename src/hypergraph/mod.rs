mod attributes;
mod edge;
mod vertex;

pub use attributes::Attributes;
pub use edge::Hyperedge;
pub use vertex::Vertex;

use crate::error::DocumentError;
use crate::math::{Point2, Vector2};

/// Axis-aligned bounds of the vertex positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Returns the extent of the bounds along each axis.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }
}

/// A hypergraph whose edges reference vertices by index.
///
/// The graph owns both lists. Construction guarantees every edge index is in
/// range, so edge members can be looked up in [`Hypergraph::positions`]
/// without bounds failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hypergraph {
    vertices: Vec<Vertex>,
    edges: Vec<Hyperedge>,
}

impl Hypergraph {
    /// Creates a hypergraph after checking every edge index.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::VertexIndexOutOfRange` for the first index
    /// that does not refer to a vertex.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Hyperedge>) -> Result<Self, DocumentError> {
        let len = vertices.len();
        for (edge, e) in edges.iter().enumerate() {
            if let Some((slot, &index)) = e.vertices.iter().enumerate().find(|&(_, &i)| i >= len) {
                return Err(DocumentError::VertexIndexOutOfRange {
                    edge,
                    slot,
                    index,
                    len,
                });
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Returns the vertices in document order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the hyperedges in document order.
    #[must_use]
    pub fn edges(&self) -> &[Hyperedge] {
        &self.edges
    }

    /// Returns the position of every vertex, indexed like [`Hypergraph::vertices`].
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Returns the bounds of all vertex positions, or `None` without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?.position;
        let bounds = self.vertices.iter().skip(1).fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, v| Bounds {
                min: b.min.inf(&v.position),
                max: b.max.sup(&v.position),
            },
        );
        Some(bounds)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(Point2::new(0.0, 0.0)),
            Vertex::new(Point2::new(10.0, -5.0)),
            Vertex::new(Point2::new(4.0, 8.0)),
        ]
    }

    #[test]
    fn accepts_valid_indices_and_degenerate_edges() {
        let edges = vec![
            Hyperedge::new(vec![]),
            Hyperedge::new(vec![1]),
            Hyperedge::new(vec![2, 2]),
            Hyperedge::new(vec![0, 1, 2]),
        ];
        let graph = Hypergraph::new(triangle(), edges).unwrap();
        assert_eq!(graph.edges().len(), 4);
        assert_eq!(graph.vertices().len(), 3);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let edges = vec![Hyperedge::new(vec![0, 1]), Hyperedge::new(vec![2, 3])];
        let err = Hypergraph::new(triangle(), edges).unwrap_err();
        match err {
            DocumentError::VertexIndexOutOfRange {
                edge,
                slot,
                index,
                len,
            } => {
                assert_eq!((edge, slot, index, len), (1, 1, 3, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn positions_follow_vertex_order() {
        let graph = Hypergraph::new(triangle(), vec![Hyperedge::new(vec![2, 0])]).unwrap();
        let positions = graph.positions();
        let members: Vec<Point2> = graph.edges()[0].vertices.iter().map(|&i| positions[i]).collect();
        assert_eq!(members, vec![Point2::new(4.0, 8.0), Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let graph = Hypergraph::new(triangle(), vec![]).unwrap();
        let b = graph.bounds().unwrap();
        assert_relative_eq!(b.min, Point2::new(0.0, -5.0));
        assert_relative_eq!(b.max, Point2::new(10.0, 8.0));
        assert_relative_eq!(b.size(), Vector2::new(10.0, 13.0));
    }

    #[test]
    fn empty_graph_has_no_bounds() {
        assert!(Hypergraph::default().bounds().is_none());
    }
}
