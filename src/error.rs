use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for hyperdraw.
#[derive(Debug, Error)]
pub enum HyperdrawError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors related to geometric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("offset radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}

/// Errors related to outline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while reading an input document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("edges[{edge}].vertices[{slot}] = {index} is not an index into the list of {len} vertices")]
    VertexIndexOutOfRange {
        edge: usize,
        slot: usize,
        index: usize,
        len: usize,
    },
}

/// Errors raised while resolving styles.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("edges[{edge}] has draw radius {radius}, which must be finite and positive")]
    InvalidRadius { edge: usize, radius: f64 },
}

/// Convenience type alias for results using [`HyperdrawError`].
pub type Result<T> = std::result::Result<T, HyperdrawError>;
