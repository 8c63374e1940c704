use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which standard-deviation score a region was measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Criterion {
    /// Deviation from the young-adult mean.
    T,
    /// Deviation from the age-matched mean.
    Z,
}

impl Criterion {
    /// Label as printed in report text. The T is Cyrillic.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::T => "Т-критерий",
            Criterion::Z => "Z-критерий",
        }
    }
}

/// Categorical densitometry diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Diagnosis {
    Osteoporosis,
    OsteopeniaGrade3,
    OsteopeniaGrade2,
    OsteopeniaGrade1,
    Normal,
}

impl Diagnosis {
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Osteoporosis => "Остеопороз",
            Diagnosis::OsteopeniaGrade3 => "Остеопения 3 ст.",
            Diagnosis::OsteopeniaGrade2 => "Остеопения 2 ст",
            Diagnosis::OsteopeniaGrade1 => "Остеопения 1 ст",
            Diagnosis::Normal => "Норма",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a score to a diagnosis.
///
/// T-scores use the graded table; Z-scores only separate osteoporosis from
/// normal. The two tables are intentionally different.
pub fn classify(value: f64, criterion: Criterion) -> Diagnosis {
    match criterion {
        Criterion::T => {
            if value <= -2.5 {
                Diagnosis::Osteoporosis
            } else if value <= -2.0 {
                Diagnosis::OsteopeniaGrade3
            } else if value <= -1.5 {
                Diagnosis::OsteopeniaGrade2
            } else if value < -1.1 {
                // -1.1 itself is normal
                Diagnosis::OsteopeniaGrade1
            } else {
                Diagnosis::Normal
            }
        }
        Criterion::Z => {
            if value <= -2.0 {
                Diagnosis::Osteoporosis
            } else {
                Diagnosis::Normal
            }
        }
    }
}
