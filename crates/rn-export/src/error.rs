//! Error types for rn-export.

use thiserror::Error;

use rn_core::NodeId;

/// Errors that can occur when exporting a network.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot export a graph with no nodes")]
    EmptyGraph,

    #[error("task edge references node {0}, which is not in the graph")]
    UnknownNode(NodeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
