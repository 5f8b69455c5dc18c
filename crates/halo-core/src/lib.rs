//! halo-core: stable foundation for the halo workspace.
//!
//! Contains:
//! - ids (compact stable IDs for graph-owned objects)
//! - error (shared error taxonomy)
//! - naming (indexed parameter/group names for generated materials)

pub mod error;
pub mod ids;
pub mod naming;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HaloError, HaloResult};
pub use ids::*;
pub use naming::*;
