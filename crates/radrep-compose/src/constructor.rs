//! Structured X-ray description assembly from selected pathologies.
//!
//! Each selected pathology contributes a description fragment for its side.
//! Fragments are bucketed by their leading side marker and laid out in the
//! study's paragraph order, with per-side default text filling empty slots.

use radrep_core::models::catalog::{
    DefaultDescription, SLOT_LEFT, SLOT_RIGHT, Selection, Study, StudyCatalog,
};
use tracing::debug;

use crate::error::ComposeError;
use crate::text::GeneratedText;

pub const MARKER_LEFT: &str = "Слева:";
pub const MARKER_RIGHT: &str = "Справа:";
pub const MARKER_BILATERAL: &str = "Справа и слева:";

/// Placeholder in a study header replaced by the study abbreviation.
pub const HEADER_ABBREVIATION: &str = "{сокращение}";

pub const FALLBACK_LEFT: &str = "Слева: Без видимых очагово-инфильтративных теней. Корни структурны. \
Легочный рисунок не изменен. Синусы свободны. Сердце и диафрагма без особенностей.";
pub const FALLBACK_RIGHT: &str = "Справа: Без видимых очагово-инфильтративных теней. Корни структурны. \
Легочный рисунок не изменен. Синусы свободны. Сердце и диафрагма без особенностей.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideBucket {
    Left,
    Right,
    Bilateral,
}

/// Detect a fragment's side from its leading marker.
pub fn bucket_of(fragment: &str) -> Option<SideBucket> {
    let t = fragment.trim_start();
    // The bilateral marker also begins with "Справа", so it is checked first.
    if t.starts_with(MARKER_BILATERAL) {
        Some(SideBucket::Bilateral)
    } else if t.starts_with(MARKER_LEFT) {
        Some(SideBucket::Left)
    } else if t.starts_with(MARKER_RIGHT) {
        Some(SideBucket::Right)
    } else {
        None
    }
}

pub fn header(study: &Study) -> String {
    study
        .header_template
        .replace(HEADER_ABBREVIATION, &study.abbreviation)
}

#[derive(Debug, Default)]
struct Buckets<'a> {
    left: Vec<&'a str>,
    right: Vec<&'a str>,
    bilateral: Vec<&'a str>,
}

impl Buckets<'_> {
    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty() && self.bilateral.is_empty()
    }
}

fn bucket_fragments<'a>(study: &'a Study, selections: &[Selection]) -> Buckets<'a> {
    let mut buckets = Buckets::default();
    for selection in selections {
        let Some(fragment) = study
            .pathology(&selection.pathology_id)
            .and_then(|p| p.description_for(&selection.side_id))
        else {
            continue;
        };
        match bucket_of(fragment) {
            Some(SideBucket::Left) => buckets.left.push(fragment),
            Some(SideBucket::Right) => buckets.right.push(fragment),
            Some(SideBucket::Bilateral) => buckets.bilateral.push(fragment),
            None => debug!(
                pathology_id = %selection.pathology_id,
                side_id = %selection.side_id,
                "description fragment has no side marker, skipped"
            ),
        }
    }
    buckets
}

/// Description body, without the header.
pub fn description(study: &Study, selections: &[Selection]) -> String {
    let buckets = bucket_fragments(study, selections);

    let per_slot = match &study.default_description {
        Some(DefaultDescription::Single(text)) => {
            if buckets.is_empty() {
                return text.clone();
            }
            None
        }
        Some(DefaultDescription::PerSlot(map)) => Some(map),
        None => None,
    };
    let slot_default = |slot: &str, fallback: &str| -> String {
        per_slot
            .and_then(|m| m.get(slot))
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    // Bilateral findings replace the generic per-side boilerplate.
    let use_defaults = buckets.bilateral.is_empty();
    let mut paragraphs = Vec::new();
    for slot in &study.paragraph_order {
        let (parts, fallback) = match slot.as_str() {
            SLOT_LEFT => (&buckets.left, FALLBACK_LEFT),
            SLOT_RIGHT => (&buckets.right, FALLBACK_RIGHT),
            _ => continue,
        };
        if !parts.is_empty() {
            paragraphs.push(parts.join(" "));
        } else if use_defaults {
            paragraphs.push(slot_default(slot, fallback));
        }
    }
    if !buckets.bilateral.is_empty() {
        paragraphs.push(buckets.bilateral.join(" "));
    }
    paragraphs.join("\n\n")
}

/// Selected conclusion fragments joined with ". ", or the study default.
pub fn conclusion(study: &Study, selections: &[Selection]) -> String {
    let parts: Vec<&str> = selections
        .iter()
        .filter_map(|s| {
            study
                .pathology(&s.pathology_id)
                .and_then(|p| p.conclusion_for(&s.side_id))
        })
        .collect();
    if parts.is_empty() {
        study.default_conclusion.clone()
    } else {
        parts.join(". ")
    }
}

/// Header and description as shown in the description pane, plus conclusion.
pub fn compose(study: &Study, selections: &[Selection]) -> GeneratedText {
    let header = header(study);
    let body = description(study, selections);
    let description = if header.is_empty() {
        body
    } else {
        format!("{header}\n\n{body}")
    };
    GeneratedText {
        description,
        conclusion: conclusion(study, selections),
    }
}

/// [`compose`] for a study looked up by id.
pub fn compose_for(
    catalog: &StudyCatalog,
    study_id: &str,
    selections: &[Selection],
) -> Result<GeneratedText, ComposeError> {
    let study = catalog
        .study(study_id)
        .ok_or_else(|| ComposeError::UnknownStudy(study_id.to_string()))?;
    Ok(compose(study, selections))
}
