//! Keystroke and paste formatting for the numeric fields.
//!
//! Mirrors what an input widget does while the user types: a decimal point
//! is inserted automatically after the first digit, further digits are
//! blocked once the format is full, and pasted text is normalised (comma to
//! dot), clamped into range and reformatted. The cursor is assumed to sit
//! at the end of the text.

use serde::{Deserialize, Serialize};

use crate::field::{FormatClass, format, shape};

pub const CRITERION_HINT: &str = "Формат: X.Y или -X.Y (одна цифра до точки, одна после)";
pub const CRITERION_HINT_TOO_MANY: &str = "Введите две цифры в формате X.Y (например 1.5 или -1.2)";
pub const DENSITY_HINT: &str = "Формат: X.YYY (одна цифра до точки, три после)";
pub const DENSITY_HINT_TOO_MANY: &str = "Плотность должна быть в формате X.YYY (максимум 4 цифры)";
pub const FRAX_HINT: &str = "FRAX должен быть целым числом от 0 до 100";

/// Validator verdict for partially typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputState {
    /// Complete and conformant.
    Acceptable,
    /// A valid prefix of a conformant value.
    Intermediate,
    /// Can never become conformant by appending.
    Invalid,
}

/// Result of a single keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The field text becomes this string.
    Replace(String),
    /// The keystroke is dropped; show the hint.
    Reject(&'static str),
}

/// Placeholder hint shown on an idle field.
pub fn hint(class: FormatClass) -> &'static str {
    match class {
        FormatClass::Criterion => CRITERION_HINT,
        FormatClass::Density => DENSITY_HINT,
        FormatClass::Frax => FRAX_HINT,
    }
}

fn overflow_hint(class: FormatClass) -> &'static str {
    match class {
        FormatClass::Criterion => CRITERION_HINT_TOO_MANY,
        FormatClass::Density => DENSITY_HINT_TOO_MANY,
        FormatClass::Frax => FRAX_HINT,
    }
}

/// Classify partially typed text.
///
/// Text that has the right shape but can only complete to a value outside
/// the class range is `Invalid`.
pub fn check(class: FormatClass, text: &str) -> InputState {
    match format_state(class, text) {
        InputState::Invalid => InputState::Invalid,
        state if in_range(class, text) => state,
        _ => InputState::Invalid,
    }
}

/// Whether the integer part, or the whole value once complete, still fits
/// the class range.
fn in_range(class: FormatClass, text: &str) -> bool {
    let (min, max) = class.range();
    let Some(s) = shape(text, class == FormatClass::Criterion) else {
        return true;
    };
    if s.int.is_empty() {
        return true;
    }
    let Ok(int) = s.int.parse::<f64>() else {
        return false;
    };
    let int = if s.negative { -int } else { int };
    if !(min..=max).contains(&int) {
        return false;
    }
    match text.parse::<f64>() {
        Ok(value) => (min..=max).contains(&value),
        Err(_) => true,
    }
}

fn format_state(class: FormatClass, text: &str) -> InputState {
    if text.is_empty() {
        return InputState::Intermediate;
    }
    match class {
        FormatClass::Criterion => {
            let Some(s) = shape(text, true) else {
                return InputState::Invalid;
            };
            match (s.int.len(), s.dot, s.frac.len()) {
                (0, false, 0) => InputState::Intermediate,
                (1, false, 0) => InputState::Intermediate,
                (1, true, 0) => InputState::Intermediate,
                (1, true, 1) => InputState::Acceptable,
                _ => InputState::Invalid,
            }
        }
        FormatClass::Density => {
            let Some(s) = shape(text, false) else {
                return InputState::Invalid;
            };
            match (s.int.len(), s.dot, s.frac.len()) {
                (1, false, 0) => InputState::Intermediate,
                (1, true, 0..=2) => InputState::Intermediate,
                (1, true, 3) => InputState::Acceptable,
                _ => InputState::Invalid,
            }
        }
        FormatClass::Frax => {
            if !text.bytes().all(|b| b.is_ascii_digit()) {
                return InputState::Invalid;
            }
            match text.parse::<u32>() {
                Ok(n) if n <= 100 => InputState::Acceptable,
                _ => InputState::Invalid,
            }
        }
    }
}

/// Apply one typed character to the current field text.
pub fn type_char(class: FormatClass, text: &str, ch: char) -> KeyOutcome {
    if ch.is_ascii_digit()
        && let Some(outcome) = digit_rule(class, text, ch)
    {
        return match outcome {
            KeyOutcome::Replace(next) if check(class, &next) == InputState::Invalid => {
                KeyOutcome::Reject(overflow_hint(class))
            }
            outcome => outcome,
        };
    }
    let mut candidate = String::with_capacity(text.len() + ch.len_utf8());
    candidate.push_str(text);
    candidate.push(ch);
    match check(class, &candidate) {
        InputState::Invalid => KeyOutcome::Reject(overflow_hint(class)),
        _ => KeyOutcome::Replace(candidate),
    }
}

/// Format-specific digit handling; `None` falls through to the validator.
fn digit_rule(class: FormatClass, text: &str, digit: char) -> Option<KeyOutcome> {
    match class {
        FormatClass::Criterion => {
            let s = shape(text, true)?;
            match (s.int.len(), s.dot, s.frac.len()) {
                (1, false, 0) => Some(KeyOutcome::Replace(format!("{text}.{digit}"))),
                (1, true, 1) => Some(KeyOutcome::Reject(CRITERION_HINT_TOO_MANY)),
                _ => None,
            }
        }
        FormatClass::Density => {
            if text.is_empty() {
                return Some(KeyOutcome::Replace(format!("{digit}.")));
            }
            let s = shape(text, false)?;
            match (s.int.len(), s.dot, s.frac.len()) {
                (1, false, 0) => Some(KeyOutcome::Replace(format!("{text}.{digit}"))),
                (1, true, 3) => Some(KeyOutcome::Reject(DENSITY_HINT_TOO_MANY)),
                _ => None,
            }
        }
        FormatClass::Frax => {
            let joined = format!("{text}{digit}");
            let trimmed = joined.trim_start_matches('0');
            let over = trimmed.len() > 3 || trimmed.parse::<u32>().is_ok_and(|n| n > 100);
            over.then_some(KeyOutcome::Reject(FRAX_HINT))
        }
    }
}

/// Normalise pasted text for a field.
///
/// Returns the new field text (empty for blank paste) or the hint to show
/// when the paste cannot be interpreted. Numeric values outside the class
/// range are clamped, not rejected.
pub fn paste(class: FormatClass, pasted: &str) -> Result<String, &'static str> {
    let text = pasted.trim();
    if text.is_empty() {
        return Ok(String::new());
    }
    match class {
        FormatClass::Criterion | FormatClass::Density => {
            let value: f64 = text
                .replace(',', ".")
                .parse()
                .map_err(|_| overflow_hint(class))?;
            if !value.is_finite() {
                return Err(overflow_hint(class));
            }
            Ok(format(class.clamp(value), class))
        }
        FormatClass::Frax => {
            let value: i64 = text.parse().map_err(|_| FRAX_HINT)?;
            Ok(value.clamp(0, 100).to_string())
        }
    }
}
