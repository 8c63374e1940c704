//! Mammography catalog: ACR density descriptions and the pathology table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pathology key of the normal study, also the base text for replacements.
pub const NORMAL_PATHOLOGY: &str = "норма";
/// Density letter selected when a panel opens.
pub const DEFAULT_DENSITY: &str = "B";
pub const DENSITY_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BreastSide {
    #[serde(rename = "правая")]
    Right,
    #[serde(rename = "левая")]
    Left,
}

impl BreastSide {
    /// Catalog key for this side.
    pub fn key(&self) -> &'static str {
        match self {
            BreastSide::Right => "правая",
            BreastSide::Left => "левая",
        }
    }

    /// Adverbial form substituted for `{side}` in conclusions.
    pub fn adverb(&self) -> &'static str {
        match self {
            BreastSide::Right => "справа",
            BreastSide::Left => "слева",
        }
    }
}

impl fmt::Display for BreastSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MammographyCatalog {
    #[serde(default)]
    pub densities: BTreeMap<String, DensityEntry>,
    #[serde(default)]
    pub pathologies: BTreeMap<String, MammographyPathology>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DensityEntry {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MammographyPathology {
    #[serde(default)]
    pub name: String,
    /// Per-side description with a `{density}` placeholder.
    #[serde(default)]
    pub description: BTreeMap<String, String>,
    /// When present, the normal description is reused and only the affected
    /// side is rewritten by this search/replace pair.
    #[serde(default)]
    pub description_replacements: Option<BTreeMap<String, SideReplacement>>,
    #[serde(default)]
    pub requires_side: bool,
    /// Conclusion text; `{side}` is substituted when `requires_side` is set.
    #[serde(default)]
    pub conclusion: String,
    /// BI-RADS category per side. Catalogs store either numbers or strings.
    #[serde(default)]
    #[ts(type = "Record<string, string | number>")]
    pub birads: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub followup: String,
}

impl MammographyPathology {
    pub fn birads_for(&self, side: BreastSide) -> Option<String> {
        self.birads.get(side.key()).map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SideReplacement {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub replace: String,
}
