//! Free-text panel rewritten by a named substitution template.

use std::cell::RefCell;
use std::rc::Rc;

use radrep_compose::{GeneratedText, substitute, text};
use radrep_core::models::modality::Modality;
use radrep_core::models::report::Report;
use radrep_core::models::template::{Template, TemplateKey};
use radrep_storage::ReportStore;

use crate::{OnGenerated, PanelState};

/// Store shared by the workspace and the panels it creates.
pub type SharedStore = Rc<RefCell<dyn ReportStore>>;

pub struct SubstitutionPanel {
    modality: Modality,
    store: SharedStore,
    original_text: String,
    template_name: Option<String>,
    last_report: Option<Report>,
    on_generated: Option<OnGenerated>,
}

impl SubstitutionPanel {
    /// The first template of the modality is preselected.
    pub fn new(modality: Modality, store: SharedStore) -> Self {
        let template_name = store
            .borrow()
            .list_templates_by_modality(modality)
            .first()
            .map(|t| t.name.clone());
        Self {
            modality,
            store,
            original_text: String::new(),
            template_name,
            last_report: None,
            on_generated: None,
        }
    }

    pub fn set_on_generated(&mut self, on_generated: OnGenerated) {
        self.on_generated = Some(on_generated);
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn set_original_text(&mut self, text: impl Into<String>) {
        self.original_text = text.into();
    }

    /// Templates offered for this panel's modality.
    pub fn templates(&self) -> Vec<Template> {
        self.store
            .borrow()
            .list_templates_by_modality(self.modality)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    /// Returns `false` and keeps the current choice if no such template exists.
    pub fn select_template(&mut self, name: &str) -> bool {
        if self.lookup(name).is_none() {
            return false;
        }
        self.template_name = Some(name.to_string());
        true
    }

    pub fn clear_template(&mut self) {
        self.template_name = None;
    }

    fn lookup(&self, name: &str) -> Option<Template> {
        let key = TemplateKey {
            modality: self.modality,
            name: name.to_string(),
        };
        let store = self.store.borrow();
        store
            .get_template(&key.to_string())
            .or_else(|| store.get_template(name))
            .cloned()
    }

    /// Rewrite the original text with the selected template and store the
    /// result as a new report. Without a template the text passes through.
    pub fn process(&mut self) -> Report {
        let template = self.template_name.as_deref().and_then(|n| self.lookup(n));
        let processed = match &template {
            Some(template) => substitute::apply(&self.original_text, template),
            None => self.original_text.clone(),
        };
        let parts = text::split(&processed);

        let mut report = Report::new(self.modality, self.original_text.clone())
            .with_text(parts.description.clone(), parts.conclusion.clone());
        report.template_name = template.map(|t| t.name);
        self.store.borrow_mut().save_report(report.clone());
        tracing::info!(
            report_id = %report.id,
            template = ?report.template_name,
            "report processed"
        );

        if let Some(callback) = self.on_generated.as_mut() {
            callback(&parts);
        }
        self.last_report = Some(report.clone());
        report
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    fn last_text(&self) -> GeneratedText {
        self.last_report
            .as_ref()
            .map(|r| GeneratedText::new(r.description.clone(), r.conclusion.clone()))
            .unwrap_or_default()
    }

    pub fn description_text(&self) -> String {
        self.last_text().description
    }

    pub fn conclusion_text(&self) -> String {
        self.last_text().conclusion
    }

    pub fn state(&self) -> PanelState {
        match (&self.last_report, self.original_text.trim().is_empty()) {
            (Some(report), _) if report.original_text == self.original_text => {
                PanelState::Generated
            }
            (_, true) => PanelState::Empty,
            (_, false) => PanelState::Valid,
        }
    }
}
