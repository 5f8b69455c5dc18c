//! Graphviz export for generated graphs.

use std::io::{self, Write};

use crate::graph::ExprGraph;

/// Write the graph as a `strict digraph`, one edge per connected slot.
///
/// Edge labels carry the consumer slot index so left/right operand order
/// stays visible in the rendered graph.
pub fn write_dot<W: Write>(graph: &ExprGraph, f: &mut W) -> io::Result<()> {
    writeln!(f, "strict digraph {{")?;
    writeln!(f, "    rankdir=LR;")?;

    for node in graph.nodes() {
        writeln!(f, "    {} [label=\"{}\"];", node.id, node.kind.label())?;
    }

    for node in graph.nodes() {
        for (slot, producer) in node.inputs().iter().enumerate() {
            if let Some(producer) = producer {
                writeln!(f, "    {} -> {} [label=\"{}\"];", producer, node.id, slot)?;
            }
        }
    }

    writeln!(f, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulate::accumulate_binary;
    use crate::expr::{BinaryOp, ExprKind};

    #[test]
    fn dot_output_lists_nodes_and_edges() {
        let mut graph = ExprGraph::new();
        let a = graph.add(ExprKind::Constant { value: 1.0 }).unwrap();
        let b = graph.add(ExprKind::Constant { value: 2.0 }).unwrap();
        accumulate_binary(&mut graph, &[a, b], BinaryOp::Add).unwrap();

        let mut out = Vec::new();
        write_dot(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("strict digraph {"));
        assert!(text.contains("[label=\"Const 1\"];"));
        assert!(text.contains("0 -> 2 [label=\"0\"];"));
        assert!(text.contains("1 -> 2 [label=\"1\"];"));
        assert!(text.trim_end().ends_with('}'));
    }
}
