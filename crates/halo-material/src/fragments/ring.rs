//! Ring mask fragment: two radial gradients subtracted into an annulus.

use halo_core::{ExprId, circle_group_name, circle_param_name};
use halo_graph::{BinaryOp, ExprGraph, ExprKind};

use crate::error::MaterialResult;
use crate::fragments::connect_input;
use crate::functions::{FunctionLibrary, RADIAL_GRADIENT_EXPONENTIAL};

/// The inner edge sits at radius − thickness / this divisor.
const THICKNESS_DIVISOR: f64 = 10.0;

/// Builds one circle's ring mask: an outer gradient minus an inner gradient,
/// scaled by the circle's opacity parameter.
///
/// Every tunable becomes a scalar parameter named `Circle_<index>_<Param>`
/// in the group `Group_Circle_<index>`, seeded with the defaults carried
/// here.
#[derive(Debug, Clone)]
pub struct RingFragment {
    pub index: usize,
    pub radius: f64,
    pub thickness: f64,
    pub density: f64,
    pub opacity: f64,
}

impl RingFragment {
    /// Output node: the opacity-scaled ring mask.
    pub fn build(
        &self,
        graph: &mut ExprGraph,
        library: &FunctionLibrary,
    ) -> MaterialResult<ExprId> {
        let gradient = library.resolve(RADIAL_GRADIENT_EXPONENTIAL)?.clone();
        let group = circle_group_name(self.index);

        let radius = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("Radius", self.index),
            group: group.clone(),
            default: self.radius,
        })?;
        let thickness = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("Thickness", self.index),
            group: group.clone(),
            default: self.thickness,
        })?;
        let density = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("Density", self.index),
            group: group.clone(),
            default: self.density,
        })?;
        let opacity = graph.add(ExprKind::ScalarParam {
            name: circle_param_name("Opacity", self.index),
            group,
            default: self.opacity,
        })?;

        // Outer edge of the annulus
        let outer = graph.add(ExprKind::FunctionCall {
            function: gradient.clone(),
        })?;
        connect_input(graph, radius, outer, &gradient, "Radius")?;
        connect_input(graph, density, outer, &gradient, "Density")?;

        // Inner edge at radius − thickness / divisor
        let divisor = graph.add(ExprKind::Constant {
            value: THICKNESS_DIVISOR,
        })?;
        let scaled_thickness = graph.add(ExprKind::Binary(BinaryOp::Divide))?;
        graph.connect(thickness, scaled_thickness, 0)?;
        graph.connect(divisor, scaled_thickness, 1)?;

        let inner_radius = graph.add(ExprKind::Binary(BinaryOp::Subtract))?;
        graph.connect(radius, inner_radius, 0)?;
        graph.connect(scaled_thickness, inner_radius, 1)?;

        let inner = graph.add(ExprKind::FunctionCall {
            function: gradient.clone(),
        })?;
        connect_input(graph, inner_radius, inner, &gradient, "Radius")?;
        connect_input(graph, density, inner, &gradient, "Density")?;

        // Annulus = outer − inner, then opacity
        let ring = graph.add(ExprKind::Binary(BinaryOp::Subtract))?;
        graph.connect(outer, ring, 0)?;
        graph.connect(inner, ring, 1)?;

        let masked = graph.add(ExprKind::Binary(BinaryOp::Multiply))?;
        graph.connect(ring, masked, 0)?;
        graph.connect(opacity, masked, 1)?;

        Ok(masked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> RingFragment {
        RingFragment {
            index: 0,
            radius: 0.1,
            thickness: 0.1,
            density: 100.0,
            opacity: 1.0,
        }
    }

    #[test]
    fn ring_wires_gradients_into_annulus() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::standard();
        let out = fragment().build(&mut graph, &library).unwrap();

        // 4 params, 2 gradient calls, divisor const, divide, subtract,
        // annulus subtract, opacity multiply.
        assert_eq!(graph.len(), 11);
        assert!(graph.validate().is_ok());

        let masked = graph.node(out).unwrap();
        assert!(matches!(masked.kind, ExprKind::Binary(BinaryOp::Multiply)));

        let ring = graph.node(masked.input(0).unwrap()).unwrap();
        assert!(matches!(ring.kind, ExprKind::Binary(BinaryOp::Subtract)));

        // Both annulus operands are gradient calls.
        for slot in [0, 1] {
            let call = graph.node(ring.input(slot).unwrap()).unwrap();
            assert!(matches!(
                &call.kind,
                ExprKind::FunctionCall { function } if function.name == RADIAL_GRADIENT_EXPONENTIAL
            ));
        }
    }

    #[test]
    fn parameters_carry_indexed_names() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::standard();
        let mut frag = fragment();
        frag.index = 3;
        frag.build(&mut graph, &library).unwrap();

        let names: Vec<_> = graph
            .nodes()
            .iter()
            .filter_map(|n| match &n.kind {
                ExprKind::ScalarParam { name, group, .. } => Some((name.clone(), group.clone())),
                _ => None,
            })
            .collect();

        assert!(names.contains(&("Circle_3_Radius".into(), "Group_Circle_3".into())));
        assert!(names.contains(&("Circle_3_Opacity".into(), "Group_Circle_3".into())));
    }

    #[test]
    fn missing_gradient_function_fails_before_allocation() {
        let mut graph = ExprGraph::new();
        let library = FunctionLibrary::new();
        let err = fragment().build(&mut graph, &library).unwrap_err();
        assert!(matches!(
            err,
            crate::error::MaterialError::MissingFunction { .. }
        ));
        assert!(graph.is_empty());
    }
}
