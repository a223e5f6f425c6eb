//! Match highlighting for result display.

use regex::RegexBuilder;

use crate::text::tokenize;

/// Wrap every occurrence of every query term in `<mark>` tags.
///
/// The query is normalized exactly as in the search pipeline, and matching
/// is case-insensitive substring containment, so a term highlights inside
/// longer words. Terms are applied in tokenization order against the
/// running result; a substring matched by two different terms may end up
/// wrapped twice. An empty query returns the text unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    let terms = tokenize(query);
    if terms.is_empty() {
        return text.to_string();
    }

    let mut out = text.to_string();
    for term in &terms {
        // Escaped literals always compile.
        let Ok(re) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        out = re.replace_all(&out, "<mark>$0</mark>").into_owned();
    }
    out
}
