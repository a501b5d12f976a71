//! Resolved drawing styles.
//!
//! Styles cascade in three layers: built-in defaults, document-level keys,
//! then keys on the individual vertex or edge. [`StyleSheet`] holds the
//! first two layers and resolves each entity into a flat record before any
//! geometry runs.

mod sheet;

pub use sheet::StyleSheet;

use crate::hypergraph::Attributes;

/// Default vertex radius.
pub const DEFAULT_VERTEX_RADIUS: f64 = 12.0;

/// Default edge draw radius: one and a half default vertex radii.
pub const DEFAULT_EDGE_DRAW_RADIUS: f64 = DEFAULT_VERTEX_RADIUS * 1.5;

/// Default padding around the vertex bounds, on every side.
pub const DEFAULT_PADDING: f64 = 30.0;

/// Fill and stroke attributes shared by vertices and edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
}

impl Paint {
    /// Overrides fields from `attrs`, reading keys `{prefix}fill`,
    /// `{prefix}fill-opacity`, `{prefix}stroke`, `{prefix}stroke-opacity`
    /// and `{prefix}stroke-width`.
    pub(crate) fn apply(&mut self, attrs: &Attributes, prefix: &str) {
        let key = |name: &str| format!("{prefix}{name}");
        if let Some(v) = attrs.string(&key("fill")) {
            v.clone_into(&mut self.fill);
        }
        if let Some(v) = attrs.number(&key("fill-opacity")) {
            self.fill_opacity = v;
        }
        if let Some(v) = attrs.string(&key("stroke")) {
            v.clone_into(&mut self.stroke);
        }
        if let Some(v) = attrs.number(&key("stroke-opacity")) {
            self.stroke_opacity = v;
        }
        if let Some(v) = attrs.number(&key("stroke-width")) {
            self.stroke_width = v;
        }
    }
}

/// Resolved style of one hyperedge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub paint: Paint,
    /// Offset of the boundary from the member positions.
    pub draw_radius: f64,
    /// Reduce members to their convex hull before tracing the boundary.
    pub hull_enabled: bool,
    pub label: Option<String>,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            paint: Paint {
                fill: "transparent".to_owned(),
                fill_opacity: 0.0,
                stroke: "black".to_owned(),
                stroke_opacity: 1.0,
                stroke_width: 1.0,
            },
            draw_radius: DEFAULT_EDGE_DRAW_RADIUS,
            hull_enabled: false,
            label: None,
        }
    }
}

/// Resolved style of one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStyle {
    pub paint: Paint,
    pub radius: f64,
    pub label: Option<String>,
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self {
            paint: Paint {
                fill: "black".to_owned(),
                fill_opacity: 1.0,
                stroke: "black".to_owned(),
                stroke_opacity: 1.0,
                stroke_width: 1.0,
            },
            radius: DEFAULT_VERTEX_RADIUS,
            label: None,
        }
    }
}

/// Space added around the vertex bounds in the drawing's view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: DEFAULT_PADDING,
            bottom: DEFAULT_PADDING,
            left: DEFAULT_PADDING,
            right: DEFAULT_PADDING,
        }
    }
}
