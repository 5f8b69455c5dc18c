use thiserror::Error;

pub type HaloResult<T> = Result<T, HaloError>;

/// Shared error taxonomy for graph construction.
///
/// Construction code surfaces these synchronously and never retries:
/// building a graph is deterministic, so retrying with the same inputs
/// would reproduce the same failure.
#[derive(Error, Debug)]
pub enum HaloError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Resource exhausted: {what} (limit={limit})")]
    Exhausted { what: String, limit: usize },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
