use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::diagnosis::{Criterion, Diagnosis, classify};
use crate::error::ValidationError;
use crate::field::{FormatClass, ScoreField};
use crate::input::{self, KeyOutcome};

/// Anatomical region measured by densitometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Region {
    /// Lumbar spine, L1–L4.
    Spine,
    FemoralNeck,
    TotalHip,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Spine, Region::FemoralNeck, Region::TotalHip];

    /// Region name in the genitive case, as used in validation messages.
    pub fn genitive(&self) -> &'static str {
        match self {
            Region::Spine => "позвоночника",
            Region::FemoralNeck => "шейки бедренной кости",
            Region::TotalHip => "проксимального отдела бедра (total hip)",
        }
    }

    pub fn requires_frax(&self) -> bool {
        matches!(self, Region::FemoralNeck)
    }
}

/// Which input of a region is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    T,
    Z,
    Density,
    Frax,
}

/// The score actually supplied for a region: exactly one of T or Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionChoice {
    pub criterion: Criterion,
    pub value: f64,
}

impl CriterionChoice {
    pub fn diagnosis(&self) -> Diagnosis {
        classify(self.value, self.criterion)
    }
}

/// A validated region: every value needed to compose its text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionReading {
    pub region: Region,
    pub density: f64,
    pub choice: CriterionChoice,
    pub frax: Option<f64>,
    pub diagnosis: Diagnosis,
}

/// Input fields of one region, independent of any widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionState {
    region: Region,
    t: ScoreField,
    z: ScoreField,
    density: ScoreField,
    frax: Option<ScoreField>,
}

impl RegionState {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            t: ScoreField::new(FormatClass::Criterion),
            z: ScoreField::new(FormatClass::Criterion),
            density: ScoreField::new(FormatClass::Density),
            frax: region
                .requires_frax()
                .then(|| ScoreField::new(FormatClass::Frax)),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// `None` when the region has no such field (FRAX outside the femoral neck).
    pub fn field(&self, kind: FieldKind) -> Option<&ScoreField> {
        match kind {
            FieldKind::T => Some(&self.t),
            FieldKind::Z => Some(&self.z),
            FieldKind::Density => Some(&self.density),
            FieldKind::Frax => self.frax.as_ref(),
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> Option<&mut ScoreField> {
        match kind {
            FieldKind::T => Some(&mut self.t),
            FieldKind::Z => Some(&mut self.z),
            FieldKind::Density => Some(&mut self.density),
            FieldKind::Frax => self.frax.as_mut(),
        }
    }

    /// Overwrite a field's raw text. Returns `false` if the region has no such field.
    pub fn set_text(&mut self, kind: FieldKind, raw: impl Into<String>) -> bool {
        match self.field_mut(kind) {
            Some(field) => {
                field.set_text(raw);
                true
            }
            None => false,
        }
    }

    /// Feed one keystroke through the field's formatting rules.
    pub fn type_char(&mut self, kind: FieldKind, ch: char) -> Option<KeyOutcome> {
        let field = self.field_mut(kind)?;
        let outcome = input::type_char(field.class(), field.text(), ch);
        if let KeyOutcome::Replace(text) = &outcome {
            field.set_text(text.clone());
        }
        Some(outcome)
    }

    /// Paste text into a field, reformatting and clamping it.
    ///
    /// On rejection the field keeps its previous text and the hint is returned.
    pub fn paste(&mut self, kind: FieldKind, pasted: &str) -> Option<Result<(), &'static str>> {
        let field = self.field_mut(kind)?;
        Some(input::paste(field.class(), pasted).map(|text| field.set_text(text)))
    }

    pub fn clear(&mut self) {
        self.t.clear();
        self.z.clear();
        self.density.clear();
        if let Some(frax) = self.frax.as_mut() {
            frax.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
            && self.z.is_empty()
            && self.density.is_empty()
            && self.frax.as_ref().is_none_or(ScoreField::is_empty)
    }

    /// Which criterion was supplied. Both or neither is an error.
    pub fn criterion(&self) -> Result<CriterionChoice, ValidationError> {
        match (self.t.value(), self.z.value()) {
            (Some(value), None) => Ok(CriterionChoice {
                criterion: Criterion::T,
                value,
            }),
            (None, Some(value)) => Ok(CriterionChoice {
                criterion: Criterion::Z,
                value,
            }),
            (Some(_), Some(_)) => Err(ValidationError::AmbiguousCriterion {
                region: self.region,
            }),
            (None, None) => Err(ValidationError::MissingCriterion {
                region: self.region,
            }),
        }
    }

    /// Completeness check for this region alone.
    ///
    /// Order: density, then criterion, then FRAX for the femoral neck.
    pub fn validate(&self) -> Result<RegionReading, ValidationError> {
        let density = self.density.value().ok_or(ValidationError::MissingDensity {
            region: self.region,
        })?;
        let choice = self.criterion()?;
        let frax = match &self.frax {
            Some(field) => Some(field.value().ok_or(ValidationError::MissingFrax)?),
            None => None,
        };
        Ok(RegionReading {
            region: self.region,
            density,
            choice,
            frax,
            diagnosis: choice.diagnosis(),
        })
    }
}

/// Cross-region rule for the combined report: the femoral neck and the
/// total hip must be measured with the same criterion.
pub fn check_same_criterion(
    neck: &RegionReading,
    hip: &RegionReading,
) -> Result<(), ValidationError> {
    if neck.choice.criterion == hip.choice.criterion {
        Ok(())
    } else {
        Err(ValidationError::CriterionMismatch)
    }
}
