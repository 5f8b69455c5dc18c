//! Graph-specific error types.

use halo_core::{ExprId, HaloError};
use thiserror::Error;

/// Graph construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A handle does not belong to this graph.
    #[error("Unknown node {node} (graph has {len} nodes)")]
    UnknownNode { node: ExprId, len: usize },

    /// The addressed input slot does not exist on the consumer.
    #[error("Slot {slot} out of range for node {node} ({count} inputs)")]
    SlotOutOfRange { node: ExprId, slot: u32, count: usize },

    /// A node may not feed its own input.
    #[error("Node {node} cannot be connected to itself")]
    SelfLoop { node: ExprId },

    /// The graph's configured node capacity is used up.
    #[error("Node limit reached ({limit})")]
    NodeLimit { limit: usize },

    /// A stored input slot count disagrees with the node kind.
    #[error("Node {node} has {actual} input slots, kind expects {expected}")]
    InputArity {
        node: ExprId,
        expected: usize,
        actual: usize,
    },

    /// A connection references a node missing from the graph.
    #[error("Node {node} input {slot} references missing node {producer}")]
    DanglingInput {
        node: ExprId,
        slot: usize,
        producer: ExprId,
    },

    /// Connections close a cycle through this node.
    #[error("Cycle through node {node}")]
    Cycle { node: ExprId },
}

impl From<GraphError> for HaloError {
    fn from(err: GraphError) -> Self {
        match &err {
            GraphError::NodeLimit { limit } => HaloError::Exhausted {
                what: "graph nodes".into(),
                limit: *limit,
            },
            GraphError::UnknownNode { .. }
            | GraphError::SlotOutOfRange { .. }
            | GraphError::SelfLoop { .. } => HaloError::InvalidArg {
                what: err.to_string(),
            },
            GraphError::InputArity { .. }
            | GraphError::DanglingInput { .. }
            | GraphError::Cycle { .. } => HaloError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
