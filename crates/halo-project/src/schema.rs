//! Material spec schema definitions.
//!
//! A spec describes the circles to generate; everything left `None` gets an
//! index-dependent default when the material graph is built.

use serde::{Deserialize, Serialize};

/// Current spec file version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialSpec {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub circles: Vec<CircleDef>,
}

impl MaterialSpec {
    /// Empty spec at the latest version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            circles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CircleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<SegmentsDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentsDef {
    pub count: u32,
    pub spacing: f64,
    #[serde(default)]
    pub center_offset: [f64; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationDef {
    /// Seconds per full revolution; larger is slower.
    pub inverse_speed: f64,
    #[serde(default)]
    pub direction: SpinDirection,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpinDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    /// Scalar factor fed into the rotation phase.
    pub fn signum(self) -> f64 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::CounterClockwise => -1.0,
        }
    }
}
