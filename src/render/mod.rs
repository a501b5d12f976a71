//! SVG rendering of a whole document.

mod svg;

pub use svg::{escape_xml, SvgWriter, ViewBox};

use std::io::Write;

use tracing::{debug, warn};

use crate::document::Document;
use crate::error::Result;
use crate::geometry::Circle;
use crate::operations::outline::{EdgeOutline, EdgeShape};

/// Draws a document as SVG.
///
/// Edges are drawn first in input order, each outlined independently, so
/// vertices end up on top of every edge outline.
#[derive(Debug)]
pub struct Renderer<'a> {
    document: &'a Document,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Writes the SVG document to `out`.
    ///
    /// Output is streamed; on error `out` may hold a partial document.
    ///
    /// # Errors
    ///
    /// - `StyleError::InvalidRadius` if an edge resolves to an unusable draw radius
    /// - `HyperdrawError::Io` if writing fails
    pub fn render<W: Write>(&self, out: W) -> Result<W> {
        let graph = &self.document.graph;
        let styles = &self.document.styles;
        let positions = graph.positions();

        let mut svg = SvgWriter::new(out);
        svg.begin(&ViewBox::around(graph.bounds(), &styles.padding))?;

        for (index, edge) in graph.edges().iter().enumerate() {
            let style = styles.resolve_edge(index, &edge.attributes)?;
            let outline = EdgeOutline::new(&positions, &edge.vertices, &style).execute()?;

            match &outline.shape {
                EdgeShape::Empty => {
                    warn!(edge = index, "edge has no vertices, nothing drawn");
                    continue;
                }
                EdgeShape::Circle(circle) => svg.circle(circle, &style.paint)?,
                EdgeShape::Path(path) => {
                    debug!(edge = index, commands = path.commands().len(), "drawing edge path");
                    svg.path(path, &style.paint)?;
                }
            }

            if let (Some(label), Some(at)) = (&style.label, outline.centroid) {
                svg.label(at, label)?;
            }
        }

        for vertex in graph.vertices() {
            let style = styles.resolve_vertex(&vertex.attributes);
            svg.circle(&Circle::new(vertex.position, style.radius), &style.paint)?;
            if let Some(label) = &style.label {
                svg.label(vertex.position, label)?;
            }
        }

        Ok(svg.finish()?)
    }

    /// Renders the whole document into a string.
    ///
    /// # Errors
    ///
    /// Same as [`Renderer::render`].
    pub fn render_to_string(&self) -> Result<String> {
        let bytes = self.render(Vec::new())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(json: &str) -> String {
        let doc = Document::from_json_str(json).unwrap();
        Renderer::new(&doc).render_to_string().unwrap()
    }

    #[test]
    fn edges_are_drawn_below_vertices() {
        let svg = render(
            r#"{"vertices": [{"pos": [0, 0]}, {"pos": [10, 0]}],
                "edges": [{"vertices": [0, 1]}]}"#,
        );
        let path_at = svg.find("<path").unwrap();
        let circle_at = svg.find("<circle").unwrap();
        assert!(path_at < circle_at);
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn single_member_edge_is_a_circle() {
        let svg = render(
            r#"{"vertices": [{"pos": [5, 5]}],
                "edges": [{"vertices": [0], "radius": 20}]}"#,
        );
        assert!(svg.contains(r#"<circle r="20.000000" cx="5.000000" cy="5.000000" fill="transparent""#));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn empty_edge_is_skipped_with_its_label() {
        let svg = render(
            r#"{"vertices": [{"pos": [0, 0]}],
                "edges": [{"vertices": [], "label": "nothing"}]}"#,
        );
        assert!(!svg.contains("nothing"));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn labels_are_placed_at_centroids() {
        let svg = render(
            r#"{"vertices": [{"pos": [0, 0], "label": "a"}, {"pos": [10, 4]}],
                "edges": [{"vertices": [0, 1], "label": "e"}]}"#,
        );
        assert!(svg.contains(r#"<text x="5.000000" y="2.000000""#));
        assert!(svg.contains(">e</text>"));
        assert!(svg.contains(r#"<text x="0.000000" y="0.000000""#));
    }

    #[test]
    fn invalid_edge_radius_aborts() {
        let doc = Document::from_json_str(
            r#"{"vertices": [{"pos": [0, 0]}], "edges": [{"vertices": [0], "radius": 0}]}"#,
        )
        .unwrap();
        assert!(Renderer::new(&doc).render_to_string().is_err());
    }
}
