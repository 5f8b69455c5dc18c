//! Material generation: fragment pipeline per circle, one accumulation
//! fold, output binding.

use halo_core::ExprId;
use halo_graph::{BinaryOp, ExprGraph, accumulate_binary};
use halo_project::{CircleDef, MaterialSpec, validate_spec};
use serde::{Deserialize, Serialize};

use crate::error::MaterialResult;
use crate::fragments::{RingFragment, RotationFragment, SegmentsFragment};
use crate::functions::FunctionLibrary;

/// Rendering domain of the finished material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialDomain {
    Surface,
    Ui,
}

/// The finished, engine-agnostic artifact: a validated expression graph
/// plus the node bound as the emissive color output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDescription {
    pub name: String,
    pub domain: MaterialDomain,
    pub graph: ExprGraph,
    pub emissive: ExprId,
}

/// Default radius staggers consecutive circles outward.
pub(crate) fn default_radius(index: usize) -> f64 {
    0.1 + index as f64 / 10.0
}

pub(crate) const DEFAULT_THICKNESS: f64 = 0.1;
pub(crate) const DEFAULT_DENSITY: f64 = 100.0;
pub(crate) const DEFAULT_OPACITY: f64 = 1.0;

/// Generate the material graph for `spec`.
///
/// Builds each circle's fragment pipeline, folds the per-circle results
/// with Add nodes, binds the fold result as the emissive output, and
/// validates the finished graph. Circle materials render in the UI domain.
pub fn generate(
    spec: &MaterialSpec,
    library: &FunctionLibrary,
) -> MaterialResult<MaterialDescription> {
    validate_spec(spec)?;

    let mut graph = ExprGraph::new();
    let mut sources = Vec::with_capacity(spec.circles.len());
    for (index, circle) in spec.circles.iter().enumerate() {
        sources.push(build_circle(&mut graph, library, index, circle)?);
    }

    let emissive = accumulate_binary(&mut graph, &sources, BinaryOp::Add)?;
    graph.validate()?;

    Ok(MaterialDescription {
        name: spec.name.clone(),
        domain: MaterialDomain::Ui,
        graph,
        emissive,
    })
}

fn build_circle(
    graph: &mut ExprGraph,
    library: &FunctionLibrary,
    index: usize,
    circle: &CircleDef,
) -> MaterialResult<ExprId> {
    let ring = RingFragment {
        index,
        radius: circle.radius.unwrap_or_else(|| default_radius(index)),
        thickness: circle.thickness.unwrap_or(DEFAULT_THICKNESS),
        density: circle.density.unwrap_or(DEFAULT_DENSITY),
        opacity: circle.opacity.unwrap_or(DEFAULT_OPACITY),
    }
    .build(graph, library)?;

    let Some(segments) = &circle.segments else {
        return Ok(ring);
    };

    let phase = circle
        .rotation
        .as_ref()
        .map(|rotation| {
            RotationFragment {
                index,
                inverse_speed: rotation.inverse_speed,
                direction: rotation.direction.signum(),
            }
            .build(graph, library)
        })
        .transpose()?;

    SegmentsFragment {
        index,
        count: segments.count,
        spacing: segments.spacing,
        center_offset: segments.center_offset,
    }
    .build(graph, library, ring, phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_radii_stagger_outward() {
        assert_eq!(default_radius(0), 0.1);
        assert_eq!(default_radius(1), 0.2);
        assert_eq!(default_radius(4), 0.5);
    }
}
