//! radrep-scoring
//!
//! Densitometry scoring rules. Pure functions over field text: no UI and
//! no I/O. Covers the constrained numeric field formats, the keystroke and
//! paste formatting rules for those fields, WHO-style diagnosis
//! classification and per-region completeness checks.

pub mod diagnosis;
pub mod error;
pub mod field;
pub mod input;
pub mod region;

pub use diagnosis::{Criterion, Diagnosis, classify};
pub use error::ValidationError;
pub use field::{FormatClass, ScoreField};
pub use region::{FieldKind, Region, RegionReading, RegionState};
