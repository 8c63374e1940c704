//! Mammography panel: density, pathology and side pickers over an editable
//! report text.

use radrep_compose::mammography::{self, MammographySelection};
use radrep_compose::{GeneratedText, text};
use radrep_core::models::mammography::{BreastSide, DENSITY_LETTERS, MammographyCatalog};

use crate::error::SessionError;
use crate::{OnGenerated, PanelState};

pub struct MammographySession {
    catalog: MammographyCatalog,
    selection: MammographySelection,
    /// The report editor. The user may edit it freely after generation.
    report: String,
    generated: bool,
    on_generated: Option<OnGenerated>,
}

impl MammographySession {
    pub fn new(catalog: MammographyCatalog) -> Self {
        Self {
            catalog,
            selection: MammographySelection::default(),
            report: String::new(),
            generated: false,
            on_generated: None,
        }
    }

    pub fn set_on_generated(&mut self, on_generated: OnGenerated) {
        self.on_generated = Some(on_generated);
    }

    pub fn catalog(&self) -> &MammographyCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &MammographySelection {
        &self.selection
    }

    /// Returns `false` for anything but an ACR letter.
    pub fn set_density(&mut self, letter: &str) -> bool {
        if !DENSITY_LETTERS.contains(&letter) {
            return false;
        }
        self.selection.density = letter.to_string();
        true
    }

    pub fn set_pathology(&mut self, key: &str) -> bool {
        if !self.catalog.pathologies.contains_key(key) {
            return false;
        }
        self.selection.pathology_key = key.to_string();
        true
    }

    pub fn set_side(&mut self, side: BreastSide) {
        self.selection.side = side;
    }

    /// Whether the side picker applies to the selected pathology.
    pub fn side_required(&self) -> bool {
        self.catalog
            .pathologies
            .get(&self.selection.pathology_key)
            .is_some_and(|p| p.requires_side)
    }

    /// Compose the report into the editor.
    pub fn generate(&mut self) -> Result<GeneratedText, SessionError> {
        let report = mammography::compose_report(&self.catalog, &self.selection)?;
        let parts = text::split(&report);
        self.report = report;
        self.generated = true;
        tracing::info!(
            pathology = %self.selection.pathology_key,
            "mammography report generated"
        );
        if let Some(callback) = self.on_generated.as_mut() {
            callback(&parts);
        }
        Ok(parts)
    }

    pub fn report_text(&self) -> &str {
        &self.report
    }

    pub fn set_report_text(&mut self, report: impl Into<String>) {
        self.report = report.into();
        self.generated = false;
    }

    /// Editor text before `ЗАКЛЮЧЕНИЕ:`.
    pub fn description_text(&self) -> String {
        text::description_of(&self.report)
    }

    /// Editor text from `ЗАКЛЮЧЕНИЕ:` on, BI-RADS and follow-up included.
    pub fn conclusion_text(&self) -> String {
        text::conclusion_of(&self.report)
    }

    pub fn state(&self) -> PanelState {
        if self.generated {
            PanelState::Generated
        } else if self.report.trim().is_empty() {
            PanelState::Empty
        } else {
            PanelState::PartiallyFilled
        }
    }
}
