//! Indexed parameter and group naming for generated materials.
//!
//! Every circle contributes a family of parameters; names carry the circle
//! index so repeated generations produce identical, diff-stable graphs.

/// Name of one circle's parameter, e.g. `Circle_2_Radius`.
pub fn circle_param_name(param: &str, index: usize) -> String {
    format!("Circle_{index}_{param}")
}

/// Name of the parameter group collecting everything one circle owns.
pub fn circle_group_name(index: usize) -> String {
    format!("Group_Circle_{index}")
}
