//! halo-project: canonical material spec file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_spec};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<MaterialSpec> {
    let content = std::fs::read_to_string(path)?;
    let spec: MaterialSpec = serde_yaml::from_str(&content)?;
    validate_spec(&spec)?;
    Ok(spec)
}

pub fn save_yaml(path: &std::path::Path, spec: &MaterialSpec) -> ProjectResult<()> {
    validate_spec(spec)?;
    let content = serde_yaml::to_string(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}
