//! Description/conclusion pairs and the textual split between them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The conclusion starts at a "Заключение." / "ЗАКЛЮЧЕНИЕ:" keyword that
/// opens the text or follows a blank line. Line breaks may be CRLF.
static CONCLUSION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\A|\r?\n[ \t]*\r?\n)[ \t]*(заключение\s*[.:])")
        .unwrap_or_else(|e| panic!("conclusion marker pattern is invalid: {e}"))
});

/// A composed report split into the two parts pasted separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub description: String,
    pub conclusion: String,
}

impl GeneratedText {
    pub fn new(description: impl Into<String>, conclusion: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            conclusion: conclusion.into(),
        }
    }

    /// Panel text: description, blank line, conclusion.
    pub fn full_text(&self) -> String {
        join(&self.description, &self.conclusion)
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.conclusion.is_empty()
    }
}

pub fn join(description: &str, conclusion: &str) -> String {
    match (description.is_empty(), conclusion.is_empty()) {
        (_, true) => description.to_string(),
        (true, false) => conclusion.to_string(),
        (false, false) => format!("{description}\n\n{conclusion}"),
    }
}

/// Split panel text back into description and conclusion.
///
/// Without a marker the whole (trimmed) text is the description and the
/// conclusion is empty.
pub fn split(text: &str) -> GeneratedText {
    match CONCLUSION_MARKER.captures(text).and_then(|c| c.get(1)) {
        Some(marker) => GeneratedText {
            description: text[..marker.start()].trim().to_string(),
            conclusion: text[marker.start()..].trim().to_string(),
        },
        None => GeneratedText {
            description: text.trim().to_string(),
            conclusion: String::new(),
        },
    }
}

pub fn description_of(text: &str) -> String {
    split(text).description
}

pub fn conclusion_of(text: &str) -> String {
    split(text).conclusion
}
