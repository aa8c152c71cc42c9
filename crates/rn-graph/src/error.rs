//! Graph-subsystem error type.

use thiserror::Error;

use rn_core::{EdgeId, NodeId};

/// Errors produced by `rn-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("node {0} added twice")]
    DuplicateNode(NodeId),

    #[error("edge {0} is not in the current edge set")]
    EdgeNotFound(EdgeId),

    #[error("no edge between {u} and {v}")]
    NoEdgeBetween { u: NodeId, v: NodeId },

    #[error("edge {0} is already present")]
    EdgeAlreadyPresent(EdgeId),

    #[error("reduction stalled at {nodes} nodes (target {target})")]
    ReductionStalled { nodes: usize, target: usize },

    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
