use radrep_core::models::template::Template;

/// Apply a template's replacements to `text`, in order.
///
/// Each pair operates on the output of the previous one, so a later search
/// string can match text introduced by an earlier replacement. Empty search
/// strings are skipped.
pub fn apply(text: &str, template: &Template) -> String {
    template
        .replacements
        .iter()
        .filter(|r| !r.search.is_empty())
        .fold(text.to_string(), |acc, r| acc.replace(&r.search, &r.replace))
}
