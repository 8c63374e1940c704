//! radrep-storage
//!
//! The report/template repository and the loaders for the static catalogs
//! and presets kept as JSON files on disk.

pub mod catalogs;
pub mod error;
pub mod json;
pub mod store;

pub use store::{InMemoryStore, ReportStore};
