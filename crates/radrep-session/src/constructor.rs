//! X-ray constructor panel: study choice, selected pathologies, presets and
//! the two-press report copy.

use std::path::{Path, PathBuf};

use radrep_compose::{GeneratedText, constructor};
use radrep_core::models::catalog::{Preset, Selection, Study, StudyCatalog};
use radrep_storage::catalogs;
use serde::{Deserialize, Serialize};

use crate::clipboard::Clipboard;
use crate::error::SessionError;
use crate::{OnGenerated, PanelState};

/// Which half of the report the next "form report" press copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStep {
    #[default]
    Description,
    Conclusion,
}

pub struct ConstructorSession {
    catalog: StudyCatalog,
    study_id: Option<String>,
    selections: Vec<Selection>,
    presets: Vec<Preset>,
    /// Where presets are persisted; `None` keeps them in memory only.
    presets_path: Option<PathBuf>,
    copy_step: CopyStep,
    on_generated: Option<OnGenerated>,
}

impl ConstructorSession {
    /// The first study of the catalog is selected initially.
    pub fn new(catalog: StudyCatalog, presets: Vec<Preset>, presets_path: Option<PathBuf>) -> Self {
        let study_id = catalog.studies.first().map(|s| s.id.clone());
        Self {
            catalog,
            study_id,
            selections: Vec::new(),
            presets,
            presets_path,
            copy_step: CopyStep::default(),
            on_generated: None,
        }
    }

    pub fn set_on_generated(&mut self, on_generated: OnGenerated) {
        self.on_generated = Some(on_generated);
    }

    pub fn catalog(&self) -> &StudyCatalog {
        &self.catalog
    }

    pub fn study(&self) -> Option<&Study> {
        self.study_id.as_deref().and_then(|id| self.catalog.study(id))
    }

    /// Switch study. Selections belong to a study and are dropped.
    pub fn select_study(&mut self, study_id: &str) -> Result<(), SessionError> {
        if self.catalog.study(study_id).is_none() {
            return Err(SessionError::UnknownStudy(study_id.to_string()));
        }
        self.study_id = Some(study_id.to_string());
        self.selections.clear();
        self.copy_step = CopyStep::Description;
        Ok(())
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Add a pathology of the current study. Without a side the pathology's
    /// first side is used.
    pub fn add_pathology(
        &mut self,
        pathology_id: &str,
        side_id: Option<&str>,
    ) -> Result<(), SessionError> {
        let study = self.study().ok_or(SessionError::NoStudySelected)?;
        let pathology = study.pathology(pathology_id).ok_or_else(|| {
            SessionError::UnknownPathology {
                study_id: study.id.clone(),
                pathology_id: pathology_id.to_string(),
            }
        })?;
        let side = match side_id {
            Some(side) if !side.is_empty() => side.to_string(),
            _ => pathology.first_side().unwrap_or_default().to_string(),
        };
        self.selections.push(Selection::new(pathology_id, side));
        self.copy_step = CopyStep::Description;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Selection> {
        if index >= self.selections.len() {
            return None;
        }
        self.copy_step = CopyStep::Description;
        Some(self.selections.remove(index))
    }

    pub fn set_side(&mut self, index: usize, side_id: &str) -> bool {
        match self.selections.get_mut(index) {
            Some(selection) => {
                selection.side_id = side_id.to_string();
                self.copy_step = CopyStep::Description;
                true
            }
            None => false,
        }
    }

    /// Current description (with header) and conclusion.
    pub fn text(&self) -> GeneratedText {
        self.study()
            .map(|study| constructor::compose(study, &self.selections))
            .unwrap_or_default()
    }

    pub fn description_text(&self) -> String {
        self.text().description
    }

    pub fn conclusion_text(&self) -> String {
        self.text().conclusion
    }

    pub fn copy_step(&self) -> CopyStep {
        self.copy_step
    }

    /// First press copies the description, the next one the conclusion.
    ///
    /// Clipboard failures are logged and otherwise ignored; the step still
    /// advances so the button never gets stuck.
    pub fn form_report(&mut self, clipboard: &mut dyn Clipboard) -> CopyStep {
        let text = self.text();
        let copied = match self.copy_step {
            CopyStep::Description => {
                if let Some(callback) = self.on_generated.as_mut() {
                    callback(&text);
                }
                self.copy_step = CopyStep::Conclusion;
                text.description
            }
            CopyStep::Conclusion => {
                self.copy_step = CopyStep::Description;
                text.conclusion
            }
        };
        if let Err(e) = clipboard.set_text(&copied) {
            tracing::debug!(error = %e, "clipboard write failed");
        }
        self.copy_step
    }

    pub fn state(&self) -> PanelState {
        match (self.selections.is_empty(), self.copy_step) {
            (_, CopyStep::Conclusion) => PanelState::Generated,
            (true, _) => PanelState::Empty,
            (false, _) => PanelState::Valid,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Save the current study and selections under `name`.
    pub fn save_preset(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPresetName);
        }
        self.presets.push(Preset {
            name: name.to_string(),
            study_id: self.study_id.clone().unwrap_or_default(),
            selections: self.selections.clone(),
        });
        self.persist_presets()
    }

    /// Restore a preset's study and selections.
    pub fn load_preset(&mut self, index: usize) -> Result<(), SessionError> {
        let preset = self
            .presets
            .get(index)
            .ok_or(SessionError::NoSuchPreset(index))?;
        self.study_id = Some(preset.study_id.clone());
        self.selections = preset.selections.clone();
        self.copy_step = CopyStep::Description;
        tracing::info!(preset = %preset.name, "preset loaded");
        Ok(())
    }

    pub fn delete_preset(&mut self, index: usize) -> Result<Preset, SessionError> {
        if index >= self.presets.len() {
            return Err(SessionError::NoSuchPreset(index));
        }
        let removed = self.presets.remove(index);
        self.persist_presets()?;
        Ok(removed)
    }

    pub fn export_presets(&self, path: &Path) -> Result<(), SessionError> {
        catalogs::save_presets(path, &self.presets)?;
        Ok(())
    }

    fn persist_presets(&self) -> Result<(), SessionError> {
        if let Some(path) = &self.presets_path {
            catalogs::save_presets(path, &self.presets)?;
        }
        Ok(())
    }

    /// Replace the catalog with one read from `path`.
    ///
    /// On error the current catalog and selections are kept.
    pub fn import_catalog(&mut self, path: &Path) -> Result<(), SessionError> {
        let catalog = catalogs::import_study_catalog(path)?;
        self.study_id = catalog.studies.first().map(|s| s.id.clone());
        self.catalog = catalog;
        self.selections.clear();
        self.copy_step = CopyStep::Description;
        Ok(())
    }
}
