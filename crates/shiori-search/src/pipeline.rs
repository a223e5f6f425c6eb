//! The search pipeline: tokenize, score, rank, group.

use chrono::Datelike;
use shiori_core::{Collection, Entry};
use tracing::debug;

use crate::{score::score, text::tokenize};

/// One ranked result. The score is always at least 1; zero-score entries
/// never leave the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub entry: &'a Entry,
    pub score: u32,
}

/// Search the collection for a free-text query.
///
/// An empty or whitespace-only query yields an empty result set, never an
/// error. Results are sorted by descending score with a stable sort, so
/// entries scoring equally keep their collection order (newest-first).
pub fn search<'a>(collection: &'a Collection, query: &str) -> Vec<SearchHit<'a>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = collection
        .iter()
        .map(|entry| SearchHit {
            entry,
            score: score(entry, &terms),
        })
        .filter(|hit| hit.score > 0)
        .collect();

    // sort_by is stable; equal scores keep collection order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(query, terms = terms.len(), results = hits.len(), "search completed");
    hits
}

/// Partition ranked hits by publication year.
///
/// Buckets appear in first-seen order over the input; within a bucket the
/// input order is preserved. Every hit lands in exactly one bucket.
pub fn group_by_year<'a>(hits: Vec<SearchHit<'a>>) -> Vec<(i32, Vec<SearchHit<'a>>)> {
    let mut groups: Vec<(i32, Vec<SearchHit<'a>>)> = Vec::new();
    for hit in hits {
        let year = hit.entry.date.year();
        match groups.iter_mut().find(|(y, _)| *y == year) {
            Some((_, bucket)) => bucket.push(hit),
            None => groups.push((year, vec![hit])),
        }
    }
    groups
}
