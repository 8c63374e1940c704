use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::modality::Modality;

/// One generated report. Created on every generation action and superseded,
/// never merged, by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub modality: Modality,
    /// Raw input the report was built from (free text for the substitution
    /// flow, a field summary for the structured flows).
    pub original_text: String,
    pub description: String,
    pub conclusion: String,
    /// Name of the substitution template applied, if any.
    pub template_name: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl Report {
    pub fn new(modality: Modality, original_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            modality,
            original_text: original_text.into(),
            description: String::new(),
            conclusion: String::new(),
            template_name: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn with_text(mut self, description: impl Into<String>, conclusion: impl Into<String>) -> Self {
        self.description = description.into();
        self.conclusion = conclusion.into();
        self
    }
}
