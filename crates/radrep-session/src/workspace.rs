//! The active modality panel and the single "last generated" slot shared by
//! the clipboard collaborators.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use radrep_compose::GeneratedText;
use radrep_core::models::modality::Modality;

use crate::clipboard::{Clipboard, PasteSequencer, PasteState, run_paste_sequence};
use crate::error::SessionError;
use crate::registry::{ModalityPlugin, Panel, PanelContext, all_plugins};
use crate::substitution::SharedStore;

#[derive(Debug, Default)]
struct LastGenerated {
    text: Option<GeneratedText>,
    /// Bumped on every generation so pollers can tell a repeat of the same
    /// text from no generation at all.
    generation: u64,
}

struct Active {
    /// Index into the plugin list.
    plugin: usize,
    panel: Panel,
}

pub struct Workspace {
    plugins: Vec<Box<dyn ModalityPlugin>>,
    context: PanelContext,
    active: Option<Active>,
    last: Rc<RefCell<LastGenerated>>,
    seen_generation: u64,
    sequencer: PasteSequencer,
}

impl Workspace {
    pub fn new(context: PanelContext) -> Self {
        Self {
            plugins: all_plugins(),
            context,
            active: None,
            last: Rc::new(RefCell::new(LastGenerated::default())),
            seen_generation: 0,
            sequencer: PasteSequencer::new(),
        }
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn ModalityPlugin> {
        self.plugins.iter().map(|p| p.as_ref())
    }

    pub fn store(&self) -> SharedStore {
        self.context.store.clone()
    }

    pub fn context_mut(&mut self) -> &mut PanelContext {
        &mut self.context
    }

    /// Open a fresh panel for `modality`.
    ///
    /// The previous panel is dropped with all its state, the last-generated
    /// slot is emptied and any paste sequence is abandoned.
    pub fn switch_modality(&mut self, modality: Modality) -> Result<&mut Panel, SessionError> {
        let index = self
            .plugins
            .iter()
            .position(|p| p.modality() == modality)
            .ok_or(SessionError::NoPlugin(modality))?;

        *self.last.borrow_mut() = LastGenerated::default();
        self.seen_generation = 0;
        self.sequencer.cancel();

        let slot = Rc::clone(&self.last);
        let on_generated = Box::new(move |text: &GeneratedText| {
            let mut last = slot.borrow_mut();
            last.text = Some(text.clone());
            last.generation += 1;
        });

        let plugin = &self.plugins[index];
        let panel = plugin.create_panel(&self.context, on_generated);
        tracing::info!(%modality, plugin = plugin.name(), "modality switched");

        let active = self.active.insert(Active {
            plugin: index,
            panel,
        });
        Ok(&mut active.panel)
    }

    fn active_plugin(&self) -> Option<&dyn ModalityPlugin> {
        self.active
            .as_ref()
            .map(|a| self.plugins[a.plugin].as_ref())
    }

    pub fn active_modality(&self) -> Option<Modality> {
        self.active_plugin().map(|p| p.modality())
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.active.as_ref().map(|a| &a.panel)
    }

    pub fn panel_mut(&mut self) -> Option<&mut Panel> {
        self.active.as_mut().map(|a| &mut a.panel)
    }

    pub fn last_generated(&self) -> Option<GeneratedText> {
        self.last.borrow().text.clone()
    }

    pub fn paste_state(&self) -> PasteState {
        self.sequencer.state()
    }

    /// Timer hook: start a paste sequence for a fresh generation, otherwise
    /// advance the running one.
    pub fn poll(&mut self, clipboard: &mut dyn Clipboard) -> PasteState {
        let (generation, text) = {
            let last = self.last.borrow();
            (last.generation, last.text.clone())
        };
        if generation != self.seen_generation {
            self.seen_generation = generation;
            let tracks = self.active_plugin().is_some_and(|p| p.tracks_pastes());
            if tracks && let Some(text) = text {
                self.sequencer.start(clipboard, &text);
                return self.sequencer.state();
            }
        }
        self.sequencer.tick(clipboard)
    }

    /// Timer-driven form of [`Workspace::poll`]: pick up the latest
    /// generation, then poll every `poll_interval` until both halves are
    /// pasted or `timeout` elapses. A timed-out sequence is cancelled.
    pub async fn run_paste_sequence(
        &mut self,
        clipboard: &mut dyn Clipboard,
        poll_interval: Duration,
        timeout: Duration,
    ) -> PasteState {
        self.poll(clipboard);
        run_paste_sequence(&mut self.sequencer, clipboard, poll_interval, timeout).await
    }

    /// Put the last generated description on the clipboard.
    pub fn paste_description(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let text = self.last_generated().map(|t| t.description);
        write_nonempty(clipboard, text)
    }

    /// Put the last generated conclusion on the clipboard. No-op when there
    /// is none.
    pub fn paste_conclusion(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let text = self.last_generated().map(|t| t.conclusion);
        write_nonempty(clipboard, text)
    }
}

fn write_nonempty(clipboard: &mut dyn Clipboard, text: Option<String>) -> bool {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return false;
    };
    match clipboard.set_text(&text) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "clipboard write failed");
            false
        }
    }
}
