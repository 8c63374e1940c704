//! X-ray constructor catalog: studies, their pathologies and saved presets.
//!
//! Field names on disk are the Russian keys of the catalog files; the Rust
//! side uses English names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Paragraph slot key for the left side.
pub const SLOT_LEFT: &str = "слева";
/// Paragraph slot key for the right side.
pub const SLOT_RIGHT: &str = "справа";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyCatalog {
    #[serde(rename = "исследования", default)]
    pub studies: Vec<Study>,
}

impl StudyCatalog {
    pub fn study(&self, id: &str) -> Option<&Study> {
        self.studies.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Study {
    pub id: String,
    #[serde(rename = "название", default)]
    pub name: String,
    #[serde(rename = "сокращение", default)]
    pub abbreviation: String,
    /// Header line; `{сокращение}` is replaced by [`Study::abbreviation`].
    #[serde(rename = "шаблон_заголовка", default)]
    pub header_template: String,
    /// Paragraph order, a list of [`SLOT_LEFT`] / [`SLOT_RIGHT`].
    #[serde(rename = "структура_описания", default = "default_paragraph_order")]
    pub paragraph_order: Vec<String>,
    #[serde(rename = "текст_по_умолчанию_описание", default)]
    pub default_description: Option<DefaultDescription>,
    #[serde(rename = "текст_по_умолчанию_заключение", default)]
    pub default_conclusion: String,
    #[serde(rename = "патологии", default)]
    pub pathologies: Vec<Pathology>,
}

impl Study {
    pub fn pathology(&self, id: &str) -> Option<&Pathology> {
        self.pathologies.iter().find(|p| p.id == id)
    }
}

fn default_paragraph_order() -> Vec<String> {
    vec![SLOT_LEFT.to_string(), SLOT_RIGHT.to_string()]
}

/// Either one "no findings" text for the whole study, or one default per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum DefaultDescription {
    Single(String),
    PerSlot(BTreeMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pathology {
    pub id: String,
    #[serde(rename = "название", default)]
    pub name: String,
    #[serde(rename = "стороны", default)]
    pub sides: Vec<SideOption>,
    #[serde(rename = "шаблоны", default)]
    pub templates: PathologyTemplates,
}

impl Pathology {
    pub fn first_side(&self) -> Option<&str> {
        self.sides.first().map(|s| s.id.as_str())
    }

    pub fn description_for(&self, side_id: &str) -> Option<&str> {
        self.templates
            .description
            .get(side_id)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn conclusion_for(&self, side_id: &str) -> Option<&str> {
        self.templates
            .conclusion
            .get(side_id)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SideOption {
    pub id: String,
    #[serde(rename = "название", default)]
    pub name: String,
}

/// Per-side fragments, keyed by side id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PathologyTemplates {
    #[serde(rename = "описание", default)]
    pub description: BTreeMap<String, String>,
    #[serde(rename = "заключение", default)]
    pub conclusion: BTreeMap<String, String>,
}

/// A pathology chosen by the user, tagged with the side it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    pub pathology_id: String,
    pub side_id: String,
}

impl Selection {
    pub fn new(pathology_id: impl Into<String>, side_id: impl Into<String>) -> Self {
        Self {
            pathology_id: pathology_id.into(),
            side_id: side_id.into(),
        }
    }
}

/// A named, saved set of selections for one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Preset {
    #[serde(rename = "название")]
    pub name: String,
    #[serde(rename = "исследование_id", default)]
    pub study_id: String,
    #[serde(rename = "патологии", default)]
    pub selections: Vec<Selection>,
}
