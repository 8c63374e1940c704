//! Clipboard access and the two-phase paste sequence.
//!
//! After a generation the description is put on the clipboard. Once the
//! user has pasted it into the target application the clipboard is swapped
//! to the conclusion, and after the second paste the sequence ends. The
//! target application is not ours, so a paste is inferred by watching the
//! clipboard: if it is empty or no longer holds the text we put there, the
//! user has moved on.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use radrep_compose::GeneratedText;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// The system clipboard, or anything standing in for it.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn text(&mut self) -> Result<String, ClipboardError>;
}

/// In-process clipboard. Clones share the same buffer, like handles to the
/// one system clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    inner: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        guard.clear();
        guard.push_str(text);
        Ok(())
    }

    fn text(&mut self) -> Result<String, ClipboardError> {
        self.inner
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteState {
    #[default]
    Idle,
    WaitingFirstPaste,
    WaitingSecondPaste,
}

/// Single-consumer state machine behind the description-then-conclusion
/// paste workflow.
///
/// Drive it either by calling [`PasteSequencer::tick`] from a repeating
/// timer or by feeding change notifications to
/// [`PasteSequencer::on_clipboard_changed`].
#[derive(Debug, Default)]
pub struct PasteSequencer {
    state: PasteState,
    pending: GeneratedText,
    /// Text of our own last write, so its change notification is not
    /// mistaken for a user paste.
    echo: Option<String>,
}

impl PasteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PasteState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != PasteState::Idle
    }

    /// Begin a new sequence, abandoning any sequence in progress.
    pub fn start(&mut self, clipboard: &mut dyn Clipboard, text: &GeneratedText) {
        if self.is_active() {
            tracing::debug!(state = ?self.state, "paste sequence restarted");
        }
        self.pending = text.clone();
        self.state = if self.write(clipboard, &text.description) {
            PasteState::WaitingFirstPaste
        } else {
            PasteState::Idle
        };
    }

    pub fn cancel(&mut self) {
        self.state = PasteState::Idle;
        self.echo = None;
    }

    /// Poll the clipboard once and advance if the user has pasted.
    pub fn tick(&mut self, clipboard: &mut dyn Clipboard) -> PasteState {
        if !self.is_active() {
            return self.state;
        }
        match clipboard.text() {
            Ok(current) => self.advance(clipboard, &current),
            Err(e) => tracing::debug!(error = %e, "clipboard read failed, skipping poll"),
        }
        self.state
    }

    /// Notification entry point: `current` is the new clipboard content.
    pub fn on_clipboard_changed(
        &mut self,
        clipboard: &mut dyn Clipboard,
        current: &str,
    ) -> PasteState {
        if self.echo.as_deref() == Some(current) {
            self.echo = None;
            return self.state;
        }
        self.advance(clipboard, current);
        self.state
    }

    fn advance(&mut self, clipboard: &mut dyn Clipboard, current: &str) {
        match self.state {
            PasteState::Idle => {}
            PasteState::WaitingFirstPaste => {
                if current.is_empty() || current != self.pending.description {
                    let conclusion = self.pending.conclusion.clone();
                    self.state = if self.write(clipboard, &conclusion) {
                        PasteState::WaitingSecondPaste
                    } else {
                        PasteState::Idle
                    };
                }
            }
            PasteState::WaitingSecondPaste => {
                if current.is_empty() || current != self.pending.conclusion {
                    self.state = PasteState::Idle;
                    self.echo = None;
                }
            }
        }
    }

    /// Best-effort write. Returns `false` if the clipboard refused it.
    fn write(&mut self, clipboard: &mut dyn Clipboard, text: &str) -> bool {
        self.echo = Some(text.to_string());
        match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "clipboard write failed, paste sequence dropped");
                self.echo = None;
                false
            }
        }
    }
}

/// Poll `clipboard` on a fixed interval until the sequence completes or
/// `timeout` elapses. A timed-out sequence is cancelled.
pub async fn run_paste_sequence(
    sequencer: &mut PasteSequencer,
    clipboard: &mut dyn Clipboard,
    poll_interval: Duration,
    timeout: Duration,
) -> PasteState {
    let deadline = tokio::time::Instant::now() + timeout;
    let mut interval = tokio::time::interval(poll_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    while sequencer.is_active() {
        tokio::select! {
            _ = interval.tick() => {
                sequencer.tick(clipboard);
            }
            _ = tokio::time::sleep_until(deadline) => {
                tracing::info!(state = ?sequencer.state(), "paste sequence timed out");
                sequencer.cancel();
            }
        }
    }
    sequencer.state()
}
