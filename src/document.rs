//! JSON input documents.
//!
//! ```json
//! {
//!   "vertices": [ { "pos": [0, 0], "label": "a" }, { "pos": [40, 10] } ],
//!   "edges": [ { "vertices": [0, 1], "stroke": "red" } ],
//!   "edge-draw-radius": 15
//! }
//! ```
//!
//! Every key besides `vertices`, `edges` and `pos` is kept as an opaque
//! attribute and only interpreted by the style cascade.

use std::io::Read;

use serde::Deserialize;

use crate::error::DocumentError;
use crate::hypergraph::{Attributes, Hyperedge, Hypergraph, Vertex};
use crate::math::Point2;
use crate::style::StyleSheet;

#[derive(Debug, Deserialize)]
struct RawDocument {
    vertices: Vec<RawVertex>,
    edges: Vec<RawEdge>,
    #[serde(flatten)]
    attributes: Attributes,
}

#[derive(Debug, Deserialize)]
struct RawVertex {
    pos: [f64; 2],
    #[serde(flatten)]
    attributes: Attributes,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    vertices: Vec<usize>,
    #[serde(flatten)]
    attributes: Attributes,
}

/// A validated input document: the hypergraph and its document-level styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub graph: Hypergraph,
    pub styles: StyleSheet,
}

impl Document {
    /// Parses and validates a document from JSON text.
    ///
    /// # Errors
    ///
    /// - `DocumentError::Malformed` for invalid JSON, missing `vertices`,
    ///   `edges` or `pos` fields, positions that are not two numbers, and
    ///   vertex indices that are not unsigned integers
    /// - `DocumentError::VertexIndexOutOfRange` for indices past the vertex list
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    /// Parses and validates a document from a reader.
    ///
    /// # Errors
    ///
    /// Same as [`Document::from_json_str`]; read failures surface as
    /// `DocumentError::Malformed`.
    pub fn from_reader(reader: impl Read) -> Result<Self, DocumentError> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, DocumentError> {
        let vertices = raw
            .vertices
            .into_iter()
            .map(|v| Vertex::new(Point2::new(v.pos[0], v.pos[1])).with_attributes(v.attributes))
            .collect();
        let edges = raw
            .edges
            .into_iter()
            .map(|e| Hyperedge::new(e.vertices).with_attributes(e.attributes))
            .collect();

        Ok(Self {
            graph: Hypergraph::new(vertices, edges)?,
            styles: StyleSheet::from_attributes(&raw.attributes),
        })
    }
}
