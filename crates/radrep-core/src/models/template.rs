use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::modality::Modality;
use crate::error::CoreError;

/// A named, ordered list of literal search/replace pairs.
///
/// Order is significant: each replacement runs over the output of the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    pub name: String,
    pub modality: Modality,
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Replacement {
    pub search: String,
    pub replace: String,
}

impl Template {
    pub fn new(name: impl Into<String>, modality: Modality) -> Self {
        Self {
            name: name.into(),
            modality,
            replacements: Vec::new(),
        }
    }

    /// Append a pair; later pairs see the text already rewritten by earlier ones.
    pub fn replace(mut self, search: impl Into<String>, replace: impl Into<String>) -> Self {
        self.replacements.push(Replacement {
            search: search.into(),
            replace: replace.into(),
        });
        self
    }

    pub fn key(&self) -> TemplateKey {
        TemplateKey {
            modality: self.modality,
            name: self.name.clone(),
        }
    }
}

/// Composite key: names are unique within a modality only.
///
/// Textual form is `"{modality}:{name}"`, e.g. `xray:Стандартный`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub modality: Modality,
    pub name: String,
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.modality, self.name)
    }
}

impl FromStr for TemplateKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (modality, name) = s
            .split_once(':')
            .ok_or_else(|| CoreError::InvalidTemplateKey(s.to_string()))?;
        let modality = modality
            .parse::<Modality>()
            .map_err(|_| CoreError::InvalidTemplateKey(s.to_string()))?;
        if name.is_empty() {
            return Err(CoreError::InvalidTemplateKey(s.to_string()));
        }
        Ok(TemplateKey {
            modality,
            name: name.to_string(),
        })
    }
}
