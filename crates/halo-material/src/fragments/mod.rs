//! Per-feature graph fragment builders.
//!
//! Each optional circle feature contributes an independent sub-graph with
//! declared inputs and outputs; the generator composes fragments per circle
//! and folds the results into the final output. Fragments connect to
//! function calls by input name, never by bare slot number.

mod ring;
mod rotation;
mod segments;

pub use ring::RingFragment;
pub use rotation::RotationFragment;
pub use segments::SegmentsFragment;

use halo_core::ExprId;
use halo_graph::{ExprGraph, FunctionSig};

use crate::error::{MaterialError, MaterialResult};

/// Connect `producer` to the input named `input` on the call node `call`.
pub(crate) fn connect_input(
    graph: &mut ExprGraph,
    producer: ExprId,
    call: ExprId,
    sig: &FunctionSig,
    input: &str,
) -> MaterialResult<()> {
    let slot = sig
        .slot(input)
        .ok_or_else(|| MaterialError::MissingFunctionInput {
            function: sig.name.clone(),
            input: input.to_string(),
        })?;
    graph.connect(producer, call, slot)?;
    Ok(())
}
