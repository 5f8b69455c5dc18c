//! Expression graph container.

use halo_core::ExprId;

use crate::error::GraphError;
use crate::expr::ExprKind;
use crate::validate;

/// One expression node: a kind plus its input connections.
///
/// The slot vector is sized from the kind when the node is added and never
/// resized afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprNode {
    pub id: ExprId,
    pub kind: ExprKind,
    pub(crate) inputs: Vec<Option<ExprId>>,
}

impl ExprNode {
    /// Producer connected to each input slot (`None` while unconnected).
    pub fn inputs(&self) -> &[Option<ExprId>] {
        &self.inputs
    }

    /// Producer connected to one slot.
    pub fn input(&self, slot: u32) -> Option<ExprId> {
        self.inputs.get(slot as usize).copied().flatten()
    }
}

/// Append-only collection of expression nodes for one generation session.
///
/// Nodes are owned by the graph from the moment [`ExprGraph::add`] returns;
/// handles stay valid for the graph's lifetime. Connections may only
/// reference nodes already present, and a node never feeds itself.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprGraph {
    nodes: Vec<ExprNode>,
    limit: Option<usize>,
}

impl ExprGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph that refuses to grow past `limit` nodes.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            nodes: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Append a node and return its handle.
    pub fn add(&mut self, kind: ExprKind) -> Result<ExprId, GraphError> {
        if let Some(limit) = self.limit {
            if self.nodes.len() >= limit {
                return Err(GraphError::NodeLimit { limit });
            }
        }
        let id = ExprId::from_index(self.nodes.len() as u32);
        let inputs = vec![None; kind.input_count()];
        self.nodes.push(ExprNode { id, kind, inputs });
        Ok(id)
    }

    /// Connect `producer`'s output to `consumer`'s input `slot`.
    ///
    /// Reconnecting an already-connected slot silently replaces the previous
    /// producer (last write wins); callers must not assume append semantics
    /// on a slot.
    pub fn connect(
        &mut self,
        producer: ExprId,
        consumer: ExprId,
        slot: u32,
    ) -> Result<(), GraphError> {
        if producer == consumer {
            return Err(GraphError::SelfLoop { node: producer });
        }
        self.check_known(producer)?;
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(consumer.index() as usize)
            .ok_or(GraphError::UnknownNode {
                node: consumer,
                len,
            })?;
        let count = node.inputs.len();
        let entry = node
            .inputs
            .get_mut(slot as usize)
            .ok_or(GraphError::SlotOutOfRange {
                node: consumer,
                slot,
                count,
            })?;
        *entry = Some(producer);
        Ok(())
    }

    /// Get a node by handle (`None` if the handle is foreign).
    pub fn node(&self, id: ExprId) -> Option<&ExprNode> {
        self.nodes.get(id.index() as usize)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[ExprNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check structural invariants of the finished graph: slot arity, no
    /// dangling references, no cycles.
    pub fn validate(&self) -> Result<(), GraphError> {
        validate::validate_inputs(&self.nodes)?;
        validate::validate_acyclic(&self.nodes)
    }

    fn check_known(&self, id: ExprId) -> Result<(), GraphError> {
        if (id.index() as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                node: id,
                len: self.nodes.len(),
            })
        }
    }
}
