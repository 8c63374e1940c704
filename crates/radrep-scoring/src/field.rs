use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Declared format of a numeric clinical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormatClass {
    /// T- or Z-criterion: `X.Y` or `-X.Y`, within [-5.0, 5.0].
    Criterion,
    /// Bone mineral density in g/cm²: `X.YYY`, within [0, 2.0].
    Density,
    /// FRAX percentage: integer, clamped to [0, 100].
    Frax,
}

impl FormatClass {
    /// Inclusive numeric range accepted for this class.
    pub fn range(&self) -> (f64, f64) {
        match self {
            FormatClass::Criterion => (-5.0, 5.0),
            FormatClass::Density => (0.0, 2.0),
            FormatClass::Frax => (0.0, 100.0),
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// Decomposition of a partially typed number: `[-]int[.frac]`.
///
/// Only ASCII digits, one optional leading minus and one optional dot are
/// allowed. Anything else yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape<'a> {
    pub negative: bool,
    pub int: &'a str,
    pub dot: bool,
    pub frac: &'a str,
}

pub(crate) fn shape(text: &str, allow_sign: bool) -> Option<Shape<'_>> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) if allow_sign => (true, rest),
        Some(_) => return None,
        None => (false, text),
    };
    let (int, dot, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, true, frac),
        None => (rest, false, ""),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || !digits(frac) {
        return None;
    }
    Some(Shape {
        negative,
        int,
        dot,
        frac,
    })
}

fn normalize(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Parse field text strictly against its format class.
///
/// Never fails loudly: empty, malformed or out-of-range text is `None`.
/// `0` is a present value, distinct from `None`.
pub fn parse(raw: &str, class: FormatClass) -> Option<f64> {
    let text = normalize(raw);
    if text.is_empty() {
        return None;
    }
    let conforms = match class {
        FormatClass::Criterion => shape(&text, true).is_some_and(|s| {
            s.int.len() == 1 && ((!s.dot && s.frac.is_empty()) || (s.dot && s.frac.len() == 1))
        }),
        FormatClass::Density => {
            shape(&text, false).is_some_and(|s| s.int.len() == 1 && s.dot && s.frac.len() == 3)
        }
        FormatClass::Frax => shape(&text, false).is_some_and(|s| !s.int.is_empty() && !s.dot),
    };
    if !conforms {
        return None;
    }

    let value: f64 = match class {
        FormatClass::Frax => {
            // Arbitrarily long digit strings still clamp to 100.
            let digits = text.trim_start_matches('0');
            if digits.len() > 3 {
                100.0
            } else {
                digits.parse::<u32>().map(f64::from).unwrap_or(0.0)
            }
        }
        _ => text.parse().ok()?,
    };

    match class {
        FormatClass::Frax => Some(class.clamp(value)),
        _ => {
            let (min, max) = class.range();
            if !(min..=max).contains(&value) {
                return None;
            }
            // "-0.0" is zero.
            Some(if value == 0.0 { 0.0 } else { value })
        }
    }
}

/// Canonical text for a value of the given class.
pub fn format(value: f64, class: FormatClass) -> String {
    match class {
        FormatClass::Criterion => format!("{:.1}", if value == 0.0 { 0.0 } else { value }),
        FormatClass::Density => format!("{value:.3}"),
        FormatClass::Frax => format!("{}", class.clamp(value).round() as u32),
    }
}

/// Parse then re-format. Idempotent on canonical text.
pub fn canonicalize(raw: &str, class: FormatClass) -> Option<String> {
    parse(raw, class).map(|v| format(v, class))
}

/// One clinical numeric input: raw text plus its parsed value.
///
/// The parsed value is derived on every write so the two never diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreField {
    class: FormatClass,
    raw: String,
    value: Option<f64>,
}

impl ScoreField {
    pub fn new(class: FormatClass) -> Self {
        Self {
            class,
            raw: String::new(),
            value: None,
        }
    }

    pub fn with_text(class: FormatClass, raw: impl Into<String>) -> Self {
        let mut field = Self::new(class);
        field.set_text(raw);
        field
    }

    pub fn class(&self) -> FormatClass {
        self.class
    }

    pub fn text(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.value = parse(&self.raw, self.class);
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.value = None;
    }

    /// Canonical rendering of the parsed value, if any.
    pub fn formatted(&self) -> Option<String> {
        self.value.map(|v| format(v, self.class))
    }
}
