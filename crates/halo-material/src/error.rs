//! Error types for material generation.

use halo_core::HaloError;
use halo_graph::GraphError;
use thiserror::Error;

pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors surfaced while assembling a material graph.
#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("Unknown material function: {name}")]
    MissingFunction { name: String },

    #[error("Function {function} has no input named {input}")]
    MissingFunctionInput { function: String, input: String },

    #[error("Invalid material spec: {0}")]
    Spec(#[from] halo_project::ValidationError),

    #[error("Graph construction failed: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] HaloError),
}
