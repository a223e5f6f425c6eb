//! Query and field-text normalization.

/// Normalize text for matching.
///
/// Punctuation and symbols become spaces, runs of whitespace collapse to a
/// single space, the result is trimmed and lowercased. Letters and digits
/// in any script survive, so CJK content stays searchable.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a query into normalized terms on whitespace.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
