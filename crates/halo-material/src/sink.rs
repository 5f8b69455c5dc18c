//! Publication of finished materials.
//!
//! Generation itself performs no I/O; a sink receives the finished
//! description and owns persistence. This is the explicit seam where an
//! asset pipeline would take over.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::generator::MaterialDescription;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives finished material descriptions.
pub trait AssetSink {
    fn publish(&mut self, material: &MaterialDescription) -> Result<(), SinkError>;
}

/// Writes each published material as `<name>.yaml` under a root directory.
#[derive(Debug, Clone)]
pub struct YamlFileSink {
    root: PathBuf,
}

impl YamlFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a material of this name is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.yaml"))
    }
}

impl AssetSink for YamlFileSink {
    fn publish(&mut self, material: &MaterialDescription) -> Result<(), SinkError> {
        fs::create_dir_all(&self.root)?;
        let content = serde_yaml::to_string(material)?;
        fs::write(self.path_for(&material.name), content)?;
        Ok(())
    }
}

/// JSON twin of [`YamlFileSink`] for machine consumers.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    root: PathBuf,
}

impl JsonFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl AssetSink for JsonFileSink {
    fn publish(&mut self, material: &MaterialDescription) -> Result<(), SinkError> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(material)?;
        fs::write(self.path_for(&material.name), content)?;
        Ok(())
    }
}

/// Test double retaining everything published.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub published: Vec<MaterialDescription>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssetSink for MemorySink {
    fn publish(&mut self, material: &MaterialDescription) -> Result<(), SinkError> {
        self.published.push(material.clone());
        Ok(())
    }
}
