use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Imaging modality. Partitions templates, validation rules and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Modality {
    /// Legacy X-ray flow: free text rewritten by a substitution template.
    Xray,
    Mammography,
    Densitometry,
    /// X-ray constructor: description assembled from selected pathologies.
    XrayConstructor,
}

impl Modality {
    pub const ALL: [Modality; 4] = [
        Modality::Xray,
        Modality::Mammography,
        Modality::Densitometry,
        Modality::XrayConstructor,
    ];

    /// Stable identifier, also used as the first half of a template key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Xray => "xray",
            Modality::Mammography => "mammography",
            Modality::Densitometry => "densitometry",
            Modality::XrayConstructor => "xray_constructor",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownModality(s.to_string()))
    }
}
