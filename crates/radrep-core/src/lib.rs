//! radrep-core
//!
//! Pure domain types for radiology report generation: modalities, reports,
//! substitution templates and the finding catalogs the composition engine
//! reads. No filesystem or UI dependency. This is the shared vocabulary of
//! the other radrep crates.

pub mod catalog_paths;
pub mod error;
pub mod models;
