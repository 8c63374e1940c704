//! radrep-desktop library root.
//!
//! Re-exports the config and bootstrap modules so integration tests can
//! exercise start-up without a window.

pub mod bootstrap;
pub mod config;
