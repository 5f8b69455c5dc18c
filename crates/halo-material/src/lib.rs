//! halo-material: circle material generation on top of halo-graph.
//!
//! Provides:
//! - The shader-library function signatures circle materials call into
//! - Per-feature fragment builders (ring mask, segmentation, rotation)
//! - The generator that assembles N circles and folds them into one
//!   emissive output
//! - The AssetSink publication interface (file-backed and in-memory)

pub mod error;
pub mod fragments;
pub mod functions;
pub mod generator;
pub mod sink;

// Re-exports for ergonomics
pub use error::{MaterialError, MaterialResult};
pub use fragments::{RingFragment, RotationFragment, SegmentsFragment};
pub use functions::FunctionLibrary;
pub use generator::{MaterialDescription, MaterialDomain, generate};
pub use sink::{AssetSink, JsonFileSink, MemorySink, SinkError, YamlFileSink};
