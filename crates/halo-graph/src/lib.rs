//! halo-graph: expression graph layer for halo.
//!
//! Provides:
//! - Expression node kinds (parameters, constants, arithmetic, function calls)
//! - Append-only graph container with slot-addressed connections
//! - The binary accumulation fold used to combine per-circle results
//! - Structural validation and Graphviz export
//!
//! # Example
//!
//! ```
//! use halo_graph::{accumulate_binary, BinaryOp, ExprGraph, ExprKind};
//!
//! let mut graph = ExprGraph::new();
//! let a = graph.add(ExprKind::Constant { value: 1.0 }).unwrap();
//! let b = graph.add(ExprKind::Constant { value: 2.0 }).unwrap();
//! let sum = accumulate_binary(&mut graph, &[a, b], BinaryOp::Add).unwrap();
//!
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.node(sum).unwrap().input(0), Some(a));
//! assert_eq!(graph.node(sum).unwrap().input(1), Some(b));
//! ```

pub mod accumulate;
pub mod dot;
pub mod error;
pub mod expr;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use accumulate::{accumulate, accumulate_binary};
pub use error::GraphError;
pub use expr::{BinaryOp, ExprKind, FunctionSig};
pub use graph::{ExprGraph, ExprNode};
