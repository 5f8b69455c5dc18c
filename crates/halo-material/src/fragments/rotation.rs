//! Rotation phase fragment.

use halo_core::{ExprId, circle_group_name, circle_param_name};
use halo_graph::{BinaryOp, ExprGraph, ExprKind};

use crate::error::MaterialResult;
use crate::fragments::connect_input;
use crate::functions::{FunctionLibrary, SEGMENTED_ROTATION};

/// Produces the animated phase signal a segmented circle spins with.
///
/// The signed phase is InverseRotationSpeed × RotationDirection; the
/// segmented-rotation library function turns that into a time-driven
/// angle. Output: the function call node, consumed by the segmentation
/// fragment's Phase input.
#[derive(Debug, Clone)]
pub struct RotationFragment {
    pub index: usize,
    pub inverse_speed: f64,
    /// +1 clockwise, −1 counter-clockwise.
    pub direction: f64,
}

impl RotationFragment {
    pub fn build(
        &self,
        graph: &mut ExprGraph,
        library: &FunctionLibrary,
    ) -> MaterialResult<ExprId> {
        let rotation_fn = library.resolve(SEGMENTED_ROTATION)?.clone();
        let group = circle_group_name(self.index);

        let inverse_speed = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("InverseRotationSpeed", self.index),
            group: group.clone(),
            default: self.inverse_speed,
        })?;
        let direction = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("RotationDirection", self.index),
            group,
            default: self.direction,
        })?;

        let signed = graph.add(ExprKind::Binary(BinaryOp::Multiply))?;
        graph.connect(inverse_speed, signed, 0)?;
        graph.connect(direction, signed, 1)?;

        let call = graph.add(ExprKind::FunctionCall {
            function: rotation_fn.clone(),
        })?;
        connect_input(graph, signed, call, &rotation_fn, "Phase")?;

        Ok(call)
    }
}
