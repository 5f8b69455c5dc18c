//! Structural validation of finished graphs.
//!
//! The mutation API already rejects bad connections, but a graph can also
//! arrive by deserialization, so validation re-checks everything the
//! container promises: slot arity, reference bounds, and acyclicity.

use crate::error::GraphError;
use crate::graph::ExprNode;

/// Every stored slot vector matches its kind's arity and references only
/// nodes present in the graph.
pub(crate) fn validate_inputs(nodes: &[ExprNode]) -> Result<(), GraphError> {
    for node in nodes {
        let expected = node.kind.input_count();
        let actual = node.inputs().len();
        if actual != expected {
            return Err(GraphError::InputArity {
                node: node.id,
                expected,
                actual,
            });
        }
        for (slot, producer) in node.inputs().iter().enumerate() {
            let Some(producer) = *producer else { continue };
            if producer == node.id {
                return Err(GraphError::SelfLoop { node: node.id });
            }
            if producer.index() as usize >= nodes.len() {
                return Err(GraphError::DanglingInput {
                    node: node.id,
                    slot,
                    producer,
                });
            }
        }
    }
    Ok(())
}

/// Connections must not close a cycle. Iterative three-color DFS.
pub(crate) fn validate_acyclic(nodes: &[ExprNode]) -> Result<(), GraphError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        White,
        Grey,
        Black,
    }

    let mut marks = vec![Mark::White; nodes.len()];
    for start in 0..nodes.len() {
        if marks[start] != Mark::White {
            continue;
        }
        marks[start] = Mark::Grey;
        // Stack frames are (node index, next slot to visit).
        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let idx = frame.0;
            let slot = frame.1;
            frame.1 += 1;
            let Some(entry) = nodes[idx].inputs().get(slot).copied() else {
                marks[idx] = Mark::Black;
                stack.pop();
                continue;
            };
            let Some(producer) = entry else { continue };
            let p = producer.index() as usize;
            match marks[p] {
                Mark::Grey => return Err(GraphError::Cycle { node: producer }),
                Mark::White => {
                    marks[p] = Mark::Grey;
                    stack.push((p, 0));
                }
                Mark::Black => {}
            }
        }
    }
    Ok(())
}
