//! Shader-library function signatures.
//!
//! Fragment builders call into pre-existing library functions by name.
//! Resolution happens before any node is created, so a missing function
//! fails the whole generation up front instead of leaving a half-wired
//! graph behind.

use std::collections::BTreeMap;

use halo_graph::FunctionSig;

use crate::error::MaterialError;

/// Exponential radial gradient centered on the UV midpoint.
pub const RADIAL_GRADIENT_EXPONENTIAL: &str = "RadialGradientExponential";
/// Splits a ring mask into evenly spaced segments.
pub const RADIAL_SEGMENTS: &str = "RadialSegments";
/// Time-driven rotation phase for segmented rings.
pub const SEGMENTED_ROTATION: &str = "SegmentedRotation";

/// Named material functions available to fragment builders.
#[derive(Debug, Clone, Default)]
pub struct FunctionLibrary {
    functions: BTreeMap<String, FunctionSig>,
}

impl FunctionLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the built-in signatures every circle material needs.
    pub fn standard() -> Self {
        let mut lib = Self::new();
        lib.register(FunctionSig::new(
            RADIAL_GRADIENT_EXPONENTIAL,
            &["UVs", "CenterPosition", "Radius", "Density"],
        ));
        lib.register(FunctionSig::new(
            RADIAL_SEGMENTS,
            &["Mask", "SegmentCount", "CenterOffset", "SegmentSpacing", "Phase"],
        ));
        lib.register(FunctionSig::new(SEGMENTED_ROTATION, &["Phase"]));
        lib
    }

    /// Register or replace a signature under its own name.
    pub fn register(&mut self, sig: FunctionSig) {
        self.functions.insert(sig.name.clone(), sig);
    }

    /// Look up a signature by name.
    pub fn resolve(&self, name: &str) -> Result<&FunctionSig, MaterialError> {
        self.functions
            .get(name)
            .ok_or_else(|| MaterialError::MissingFunction {
                name: name.to_string(),
            })
    }
}
