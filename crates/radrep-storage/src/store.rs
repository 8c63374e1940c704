//! Report and template repository.

use radrep_core::models::modality::Modality;
use radrep_core::models::report::Report;
use radrep_core::models::template::{Template, TemplateKey};
use uuid::Uuid;

/// Operations the UI collaborators rely on. Any backing store will do.
pub trait ReportStore {
    fn save_report(&mut self, report: Report);
    fn get_report(&self, id: Uuid) -> Option<&Report>;
    fn list_reports(&self) -> Vec<&Report>;

    /// Insert or replace by `(modality, name)`.
    fn save_template(&mut self, template: Template);
    /// Exact `"modality:name"` key first, then the first template with that name.
    fn get_template(&self, name: &str) -> Option<&Template>;
    fn list_templates(&self) -> Vec<&Template>;

    fn list_templates_by_modality(&self, modality: Modality) -> Vec<&Template> {
        self.list_templates()
            .into_iter()
            .filter(|t| t.modality == modality)
            .collect()
    }
}

/// Process-lifetime store. Entries keep their first insertion position.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    reports: Vec<Report>,
    templates: Vec<Template>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with [`default_templates`].
    pub fn with_default_templates() -> Self {
        let mut store = Self::new();
        for template in default_templates() {
            store.save_template(template);
        }
        store
    }
}

impl ReportStore for InMemoryStore {
    fn save_report(&mut self, report: Report) {
        match self.reports.iter_mut().find(|r| r.id == report.id) {
            Some(slot) => *slot = report,
            None => self.reports.push(report),
        }
    }

    fn get_report(&self, id: Uuid) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    fn list_reports(&self) -> Vec<&Report> {
        self.reports.iter().collect()
    }

    fn save_template(&mut self, template: Template) {
        let key = template.key();
        tracing::debug!(key = %key, "template saved");
        match self.templates.iter_mut().find(|t| t.key() == key) {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }

    fn get_template(&self, name: &str) -> Option<&Template> {
        if let Ok(key) = name.parse::<TemplateKey>()
            && let Some(found) = self.templates.iter().find(|t| t.key() == key)
        {
            return Some(found);
        }
        self.templates.iter().find(|t| t.name == name)
    }

    fn list_templates(&self) -> Vec<&Template> {
        self.templates.iter().collect()
    }
}

/// Built-in substitution templates.
pub fn default_templates() -> Vec<Template> {
    vec![
        Template::new("Стандартный", Modality::Xray)
            .replace(
                "без патологических изменений",
                "без патологических изменений в легких",
            )
            .replace(
                "легкие без особенностей",
                "легкие без патологических изменений",
            )
            .replace("сердце в норме", "сердце без патологических изменений")
            .replace("без изменений", "без патологических изменений"),
        Template::new("Формализованный", Modality::Xray)
            .replace("норма", "патологических изменений не выявлено")
            .replace("все ок", "патологических изменений не обнаружено")
            .replace("здоров", "признаков патологии не определяется"),
        Template::new("Mammo: стандарт", Modality::Mammography)
            .replace(
                "без очаговых образований",
                "очаговых и инфильтративных изменений не выявлено",
            )
            .replace(
                "микрокальцинаты не выявлены",
                "патологических микрокальцинатов не определяется",
            ),
        Template::new("DXA: стандарт", Modality::Densitometry)
            .replace("остеопороз", "денситометрические признаки остеопороза")
            .replace("остеопения", "денситометрические признаки остеопении"),
    ]
}
