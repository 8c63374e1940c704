//! Mammography report assembly from the density/pathology catalog.

use radrep_core::models::mammography::{
    BreastSide, DEFAULT_DENSITY, MammographyCatalog, MammographyPathology, NORMAL_PATHOLOGY,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ComposeError;
use crate::text::{self, GeneratedText};

const DENSITY_PLACEHOLDER: &str = "{density}";
const SIDE_PLACEHOLDER: &str = "{side}";
const DEFAULT_BIRADS: &str = "1";

/// What the user picked on the mammography panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MammographySelection {
    /// ACR letter, A to D.
    pub density: String,
    pub pathology_key: String,
    /// Affected side; only meaningful for pathologies that require one.
    pub side: BreastSide,
}

impl Default for MammographySelection {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY.to_string(),
            pathology_key: NORMAL_PATHOLOGY.to_string(),
            side: BreastSide::Right,
        }
    }
}

fn density_text<'a>(catalog: &'a MammographyCatalog, letter: &str) -> &'a str {
    catalog
        .densities
        .get(letter)
        .map(|d| d.description.as_str())
        .unwrap_or("")
}

fn side_template<'a>(pathology: &'a MammographyPathology, side: BreastSide) -> &'a str {
    pathology
        .description
        .get(side.key())
        .map(String::as_str)
        .unwrap_or("")
}

/// Description of one breast for the current selection.
///
/// Pathologies with side replacements start from the normal-breast text and
/// rewrite only the affected side.
pub fn description_for_side(
    catalog: &MammographyCatalog,
    selection: &MammographySelection,
    side: BreastSide,
) -> String {
    let density = density_text(catalog, &selection.density);
    let Some(pathology) = catalog.pathologies.get(&selection.pathology_key) else {
        return String::new();
    };

    if let Some(replacements) = &pathology.description_replacements {
        let mut base = catalog
            .pathologies
            .get(NORMAL_PATHOLOGY)
            .map(|normal| side_template(normal, side).replace(DENSITY_PLACEHOLDER, density))
            .unwrap_or_default();
        if side == selection.side
            && let Some(r) = replacements.get(side.key())
            && !r.search.is_empty()
            && !r.replace.is_empty()
        {
            base = base.replace(&r.search, &r.replace);
        }
        return base;
    }

    side_template(pathology, side).replace(DENSITY_PLACEHOLDER, density)
}

fn birads_line(pathology: &MammographyPathology, side: BreastSide) -> String {
    let right = pathology
        .birads_for(BreastSide::Right)
        .unwrap_or_else(|| DEFAULT_BIRADS.to_string());
    if !pathology.requires_side {
        return format!("BIRADS {right} СПРАВА И СЛЕВА");
    }
    let left = pathology
        .birads_for(BreastSide::Left)
        .unwrap_or_else(|| DEFAULT_BIRADS.to_string());
    // Catalog categories are written for a right-sided finding.
    let (right, left) = match side {
        BreastSide::Right => (right, left),
        BreastSide::Left => (left, right),
    };
    format!("BIRADS {right} справа, BIRADS {left} слева")
}

/// Full panel text: both descriptions, conclusion, BI-RADS and follow-up.
pub fn compose_report(
    catalog: &MammographyCatalog,
    selection: &MammographySelection,
) -> Result<String, ComposeError> {
    let pathology = catalog
        .pathologies
        .get(&selection.pathology_key)
        .ok_or_else(|| ComposeError::UnknownFinding(selection.pathology_key.clone()))?;

    let conclusion = if pathology.requires_side {
        pathology
            .conclusion
            .replace(SIDE_PLACEHOLDER, selection.side.adverb())
    } else {
        pathology.conclusion.clone()
    };

    let lines = [
        description_for_side(catalog, selection, BreastSide::Right),
        String::new(),
        description_for_side(catalog, selection, BreastSide::Left),
        String::new(),
        format!("ЗАКЛЮЧЕНИЕ: {conclusion}"),
        birads_line(pathology, selection.side),
        String::new(),
        pathology.followup.clone(),
    ];
    debug!(
        pathology = %selection.pathology_key,
        density = %selection.density,
        side = %selection.side,
        "mammography report composed"
    );
    Ok(lines.join("\n"))
}

/// Report split at the `ЗАКЛЮЧЕНИЕ:` line.
pub fn compose(
    catalog: &MammographyCatalog,
    selection: &MammographySelection,
) -> Result<GeneratedText, ComposeError> {
    compose_report(catalog, selection).map(|full| text::split(&full))
}
