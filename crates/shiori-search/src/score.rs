//! Relevance scoring across weighted fields.
//!
//! Scores are additive per term per field with no cap. Matching is
//! substring containment over normalized text, so a term matches inside a
//! longer word ("cat" matches "category"). Localized field variants score
//! the full weight; a canonical unsuffixed field that matches where no
//! variant did scores one point lower, ranking translated content above
//! legacy untranslated entries.

use shiori_core::Entry;

use crate::text::normalize;

/// Per-term weight for a match in a localized title variant.
pub const TITLE_WEIGHT: u32 = 10;
/// Per-term weight when only the canonical untranslated title matches.
pub const TITLE_CANONICAL_WEIGHT: u32 = 9;
/// Per-term weight for a match in a localized summary variant.
pub const SUMMARY_WEIGHT: u32 = 5;
/// Per-term weight when only the canonical untranslated summary matches.
pub const SUMMARY_CANONICAL_WEIGHT: u32 = 4;
/// Per-term weight for a match in any tag.
pub const TAG_WEIGHT: u32 = 5;
/// Per-term weight for a match in the loaded body.
pub const BODY_WEIGHT: u32 = 3;

/// Score an entry against already-normalized query terms.
///
/// Zero means no term matched anywhere; an unloaded body simply
/// contributes nothing.
pub fn score(entry: &Entry, terms: &[String]) -> u32 {
    let title_variants: Vec<String> = entry
        .title()
        .localized()
        .map(|(_, text)| normalize(text))
        .collect();
    let title_canonical = entry.title().canonical().map(normalize);

    let summary_variants: Vec<String> = entry
        .summary()
        .localized()
        .map(|(_, text)| normalize(text))
        .collect();
    let summary_canonical = entry.summary().canonical().map(normalize);

    let tags: Vec<String> = entry.tags.iter().map(|tag| normalize(tag)).collect();
    let body = entry.body().map(normalize);

    let mut total = 0;
    for term in terms {
        total += localized_field_score(
            &title_variants,
            title_canonical.as_deref(),
            term,
            TITLE_WEIGHT,
            TITLE_CANONICAL_WEIGHT,
        );
        total += localized_field_score(
            &summary_variants,
            summary_canonical.as_deref(),
            term,
            SUMMARY_WEIGHT,
            SUMMARY_CANONICAL_WEIGHT,
        );
        if tags.iter().any(|tag| tag.contains(term.as_str())) {
            total += TAG_WEIGHT;
        }
        if body.as_deref().is_some_and(|b| b.contains(term.as_str())) {
            total += BODY_WEIGHT;
        }
    }
    total
}

fn localized_field_score(
    variants: &[String],
    canonical: Option<&str>,
    term: &str,
    weight: u32,
    canonical_weight: u32,
) -> u32 {
    if variants.iter().any(|v| v.contains(term)) {
        weight
    } else if canonical.is_some_and(|c| c.contains(term)) {
        canonical_weight
    } else {
        0
    }
}
