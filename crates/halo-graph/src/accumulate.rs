//! Folding per-unit results into a single node.

use halo_core::{ExprId, HaloError, HaloResult};

use crate::expr::{BinaryOp, ExprKind};
use crate::graph::ExprGraph;

/// Fold `sources` left-to-right into a single node, allocating one fresh
/// two-input operator per step via `make_op`.
///
/// The chain shape is a sequential left fold, not a balanced tree: with
/// sources `[a, b, c, d]` the result is `op2(op1(op0(a, b), c), d)`. Slot 0
/// always carries the running total and slot 1 the next source, so repeated
/// invocations over the same source order produce an isomorphic topology
/// and regenerated graphs stay diff-stable. The operator is assumed
/// associative.
///
/// Exactly `N − 1` operators are created for `N` sources; a single source is
/// returned unchanged and nothing is allocated.
///
/// # Errors
///
/// - [`HaloError::InvalidArg`] if `sources` is empty; the graph is untouched.
/// - Factory and connection failures propagate unchanged. Operators already
///   committed to the graph remain (no rollback), but the error always
///   surfaces to the caller.
pub fn accumulate<F>(
    graph: &mut ExprGraph,
    sources: &[ExprId],
    mut make_op: F,
) -> HaloResult<ExprId>
where
    F: FnMut(&mut ExprGraph) -> HaloResult<ExprId>,
{
    let Some((&first, rest)) = sources.split_first() else {
        return Err(HaloError::InvalidArg {
            what: "cannot accumulate an empty source sequence".into(),
        });
    };

    let mut acc = first;
    for &source in rest {
        let op = make_op(graph)?;
        graph.connect(acc, op, 0)?;
        graph.connect(source, op, 1)?;
        acc = op;
    }
    Ok(acc)
}

/// [`accumulate`] with a stock arithmetic operator as the chain node.
pub fn accumulate_binary(
    graph: &mut ExprGraph,
    sources: &[ExprId],
    op: BinaryOp,
) -> HaloResult<ExprId> {
    accumulate(graph, sources, |g| {
        g.add(ExprKind::Binary(op)).map_err(HaloError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_sources(n: usize) -> (ExprGraph, Vec<ExprId>) {
        let mut graph = ExprGraph::new();
        let sources = (0..n)
            .map(|i| {
                graph
                    .add(ExprKind::Constant { value: i as f64 })
                    .unwrap()
            })
            .collect();
        (graph, sources)
    }

    #[test]
    fn single_source_is_returned_unchanged() {
        let (mut graph, sources) = graph_with_sources(1);
        let result = accumulate_binary(&mut graph, &sources, BinaryOp::Add).unwrap();
        assert_eq!(result, sources[0]);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn pair_connects_both_slots() {
        let (mut graph, sources) = graph_with_sources(2);
        let result = accumulate_binary(&mut graph, &sources, BinaryOp::Add).unwrap();

        assert_eq!(graph.len(), 3);
        let op = graph.node(result).unwrap();
        assert_eq!(op.input(0), Some(sources[0]));
        assert_eq!(op.input(1), Some(sources[1]));
    }

    #[test]
    fn empty_sources_fail_without_side_effects() {
        let mut graph = ExprGraph::new();
        let err = accumulate_binary(&mut graph, &[], BinaryOp::Add).unwrap_err();
        assert!(matches!(err, HaloError::InvalidArg { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn factory_failure_propagates() {
        let (mut graph, sources) = graph_with_sources(3);
        let mut calls = 0;
        let err = accumulate(&mut graph, &sources, |g| {
            calls += 1;
            if calls == 2 {
                return Err(HaloError::Exhausted {
                    what: "operator pool".into(),
                    limit: 1,
                });
            }
            g.add(ExprKind::Binary(BinaryOp::Add)).map_err(HaloError::from)
        })
        .unwrap_err();

        assert!(matches!(err, HaloError::Exhausted { .. }));
        // The first operator stays committed; nothing is rolled back.
        assert_eq!(graph.len(), 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn left_fold_shape_holds(n in 1usize..64) {
                let (mut graph, sources) = graph_with_sources(n);
                let result = accumulate_binary(&mut graph, &sources, BinaryOp::Add).unwrap();

                // Exactly N - 1 operators were created.
                prop_assert_eq!(graph.len(), 2 * n - 1);

                // Walk the chain back from the result: slot 1 holds sources in
                // reverse order, slot 0 the previous link.
                let mut cursor = result;
                for i in (1..n).rev() {
                    let node = graph.node(cursor).unwrap();
                    prop_assert!(matches!(node.kind, ExprKind::Binary(BinaryOp::Add)));
                    prop_assert_eq!(node.input(1), Some(sources[i]));
                    cursor = node.input(0).unwrap();
                }
                prop_assert_eq!(cursor, sources[0]);
            }
        }
    }
}
