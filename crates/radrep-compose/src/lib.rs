//! radrep-compose
//!
//! Report text composition: literal substitution templates, structured
//! assembly from selected findings, densitometry phrasing, and the
//! description/conclusion split used by copy actions.

pub mod constructor;
pub mod densitometry;
pub mod error;
pub mod mammography;
pub mod render;
pub mod substitute;
pub mod text;

pub use text::GeneratedText;
