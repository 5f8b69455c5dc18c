//! Expression node kinds.
//!
//! A node's kind fixes its input slot count; the graph allocates the slot
//! storage when the node is added. Kinds are plain data, so a graph can be
//! serialized and re-validated without any engine reflection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operators available as two-input nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Operator glyph for diagnostics and dot labels.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

/// Signature of a shader-library function callable from a graph.
///
/// Input order is the slot order: `inputs[i]` names slot `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionSig {
    pub name: String,
    pub inputs: Vec<String>,
}

impl FunctionSig {
    pub fn new(name: impl Into<String>, inputs: &[&str]) -> Self {
        Self {
            name: name.into(),
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Slot index of a named input, if the function declares it.
    pub fn slot(&self, input: &str) -> Option<u32> {
        self.inputs.iter().position(|i| i == input).map(|i| i as u32)
    }
}

/// What a node computes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprKind {
    /// Editor-tunable scalar, grouped per circle.
    ScalarParam {
        name: String,
        group: String,
        default: f64,
    },
    /// Editor-tunable 4-component vector.
    VectorParam {
        name: String,
        group: String,
        default: [f64; 4],
    },
    /// Literal scalar.
    Constant { value: f64 },
    /// Two-input arithmetic node; slot 0 is the left operand.
    Binary(BinaryOp),
    /// Call into a named shader-library function.
    FunctionCall { function: FunctionSig },
}

impl ExprKind {
    /// Number of input slots this kind exposes.
    pub fn input_count(&self) -> usize {
        match self {
            ExprKind::ScalarParam { .. }
            | ExprKind::VectorParam { .. }
            | ExprKind::Constant { .. } => 0,
            ExprKind::Binary(_) => 2,
            ExprKind::FunctionCall { function } => function.inputs.len(),
        }
    }

    /// Short human-readable label for diagnostics and dot export.
    pub fn label(&self) -> String {
        match self {
            ExprKind::ScalarParam { name, .. } => format!("Scalar {name}"),
            ExprKind::VectorParam { name, .. } => format!("Vector {name}"),
            ExprKind::Constant { value } => format!("Const {value}"),
            ExprKind::Binary(op) => format!("{op:?}"),
            ExprKind::FunctionCall { function } => format!("Call {}", function.name),
        }
    }
}
