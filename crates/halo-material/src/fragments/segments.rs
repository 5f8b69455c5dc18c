//! Radial segmentation fragment.

use halo_core::{ExprId, circle_group_name, circle_param_name};
use halo_graph::{ExprGraph, ExprKind};

use crate::error::MaterialResult;
use crate::fragments::connect_input;
use crate::functions::{FunctionLibrary, RADIAL_SEGMENTS};

/// Splits a circle's ring mask into evenly spaced segments.
///
/// Inputs: the ring mask node and an optional rotation phase node. Without
/// a phase the segments sit still at a constant zero phase.
#[derive(Debug, Clone)]
pub struct SegmentsFragment {
    pub index: usize,
    pub count: u32,
    pub spacing: f64,
    pub center_offset: [f64; 4],
}

impl SegmentsFragment {
    /// Output node: the segmented mask.
    pub fn build(
        &self,
        graph: &mut ExprGraph,
        library: &FunctionLibrary,
        mask: ExprId,
        phase: Option<ExprId>,
    ) -> MaterialResult<ExprId> {
        let segments_fn = library.resolve(RADIAL_SEGMENTS)?.clone();
        let group = circle_group_name(self.index);

        let count = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("SegmentCount", self.index),
            group: group.clone(),
            default: f64::from(self.count),
        })?;
        let spacing = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("SegmentSpacing", self.index),
            group: group.clone(),
            default: self.spacing,
        })?;
        let center = graph.add(ExprKind::VectorParam {
            name: circle_param_name("CenterOffset", self.index),
            group,
            default: self.center_offset,
        })?;

        let phase = match phase {
            Some(phase) => phase,
            None => graph.add(ExprKind::Constant { value: 0.0 })?,
        };

        let call = graph.add(ExprKind::FunctionCall {
            function: segments_fn.clone(),
        })?;
        connect_input(graph, mask, call, &segments_fn, "Mask")?;
        connect_input(graph, count, call, &segments_fn, "SegmentCount")?;
        connect_input(graph, center, call, &segments_fn, "CenterOffset")?;
        connect_input(graph, spacing, call, &segments_fn, "SegmentSpacing")?;
        connect_input(graph, phase, call, &segments_fn, "Phase")?;

        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> SegmentsFragment {
        SegmentsFragment {
            index: 0,
            count: 6,
            spacing: 0.02,
            center_offset: [0.5, 0.5, 0.0, 0.0],
        }
    }

    #[test]
    fn segments_consume_mask_and_constant_phase() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::standard();
        let mask = graph.add(ExprKind::Constant { value: 1.0 }).unwrap();

        let out = fragment().build(&mut graph, &library, mask, None).unwrap();
        assert!(graph.validate().is_ok());

        let call = graph.node(out).unwrap();
        assert_eq!(call.inputs().len(), 5);
        assert_eq!(call.input(0), Some(mask));

        // Phase slot falls back to a zero constant.
        let phase = graph.node(call.input(4).unwrap()).unwrap();
        assert!(matches!(phase.kind, ExprKind::Constant { value } if value == 0.0));
    }

    #[test]
    fn explicit_phase_is_wired_through() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::standard();
        let mask = graph.add(ExprKind::Constant { value: 1.0 }).unwrap();
        let phase = graph.add(ExprKind::Constant { value: 0.25 }).unwrap();

        let out = fragment()
            .build(&mut graph, &library, mask, Some(phase))
            .unwrap();

        assert_eq!(graph.node(out).unwrap().input(4), Some(phase));
    }

    #[test]
    fn segment_count_defaults_from_config() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::standard();
        let mask = graph.add(ExprKind::Constant { value: 1.0 }).unwrap();
        fragment().build(&mut graph, &library, mask, None).unwrap();

        let count = graph.nodes().iter().find_map(|n| match &n.kind {
            ExprKind::ScalarParam { name, default, .. } if name == "Circle_0_SegmentCount" => {
                Some(*default)
            }
            _ => None,
        });
        assert_eq!(count, Some(6.0));
    }
}
