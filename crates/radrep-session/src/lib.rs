//! radrep-session
//!
//! Mutable per-modality panel state: field edits, selections, generation
//! with its side effects, the clipboard paste sequence, and the workspace
//! that switches between modality panels.

pub mod clipboard;
pub mod constructor;
pub mod densitometry;
pub mod error;
pub mod mammography;
pub mod registry;
pub mod substitution;
pub mod workspace;

use radrep_compose::GeneratedText;
use serde::{Deserialize, Serialize};

/// Called with every successfully generated description/conclusion pair.
pub type OnGenerated = Box<dyn FnMut(&GeneratedText)>;

/// Coarse lifecycle of a modality panel, derived from its current content.
///
/// Any edit after a generation drops the panel back to `PartiallyFilled`
/// or `Valid`; generation always re-validates from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Empty,
    PartiallyFilled,
    Valid,
    Generated,
}

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, PasteSequencer, PasteState};
pub use error::SessionError;
pub use registry::{ModalityPlugin, Panel, all_plugins, get_plugin};
pub use workspace::Workspace;
