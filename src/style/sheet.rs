use crate::error::StyleError;
use crate::hypergraph::Attributes;

use super::{EdgeStyle, Padding, VertexStyle};

/// Document-wide style defaults, layered over the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub padding: Padding,
    pub vertex: VertexStyle,
    pub edge: EdgeStyle,
}

impl StyleSheet {
    /// Reads document-level keys (`padding-*`, `vertex-*`, `edge-*`) over the
    /// built-in defaults. Missing and wrongly typed keys keep the default.
    #[must_use]
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let mut sheet = Self::default();

        let padding = &mut sheet.padding;
        for (key, side) in [
            ("padding-top", &mut padding.top),
            ("padding-bottom", &mut padding.bottom),
            ("padding-left", &mut padding.left),
            ("padding-right", &mut padding.right),
        ] {
            if let Some(v) = attrs.number(key) {
                *side = v;
            }
        }

        if let Some(v) = attrs.number("vertex-radius") {
            sheet.vertex.radius = v;
        }
        sheet.vertex.paint.apply(attrs, "vertex-");

        if let Some(v) = attrs.number("edge-draw-radius") {
            sheet.edge.draw_radius = v;
        }
        if let Some(v) = attrs.boolean("edge-convex-hull") {
            sheet.edge.hull_enabled = v;
        }
        sheet.edge.paint.apply(attrs, "edge-");

        sheet
    }

    /// Resolves the style of edge number `index` from its own attributes.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::InvalidRadius` if the resolved draw radius is not
    /// finite and positive.
    pub fn resolve_edge(&self, index: usize, attrs: &Attributes) -> Result<EdgeStyle, StyleError> {
        let mut style = self.edge.clone();
        style.paint.apply(attrs, "");
        if let Some(v) = attrs.number("radius") {
            style.draw_radius = v;
        }
        if let Some(v) = attrs.boolean("convex-hull") {
            style.hull_enabled = v;
        }
        style.label = attrs.string("label").map(str::to_owned);

        if !style.draw_radius.is_finite() || style.draw_radius <= 0.0 {
            return Err(StyleError::InvalidRadius {
                edge: index,
                radius: style.draw_radius,
            });
        }
        Ok(style)
    }

    /// Resolves the style of a vertex from its own attributes.
    #[must_use]
    pub fn resolve_vertex(&self, attrs: &Attributes) -> VertexStyle {
        let mut style = self.vertex.clone();
        style.paint.apply(attrs, "");
        if let Some(v) = attrs.number("radius") {
            style.radius = v;
        }
        style.label = attrs.string("label").map(str::to_owned);
        style
    }
}
