//! The read-only content collection.
//!
//! Populated once at startup from the bundled data and never mutated
//! afterwards. All search and localization operations borrow from it.

use tracing::info;

use crate::{
    entry::{Entry, EntryKind},
    error::Result,
};

/// An ordered, read-only set of content entities.
///
/// Entries are kept newest-first; ties keep their authored order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    /// Build a collection, sorting entries newest-first.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        info!(entries = entries.len(), "loaded content collection");
        Self { entries }
    }

    /// Parse a collection from an authored JSON array of entities.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Find an entry by its stable slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    /// All entries carrying the given tag, newest-first.
    pub fn by_tag(&self, tag: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Entries of one kind, newest-first.
    pub fn of_kind(&self, kind: EntryKind) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .collect()
    }

    /// Every distinct tag, in first-seen order over the date ordering.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                if !tags.contains(&tag.as_str()) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    /// Entries sharing the given entry's primary tag, excluding the entry
    /// itself, newest-first, at most `limit`.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Entry> {
        let Some(entry) = self.by_slug(slug) else {
            return Vec::new();
        };
        let Some(primary_tag) = entry.tags.first() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|other| other.slug != slug && other.tags.iter().any(|t| t == primary_tag))
            .take(limit)
            .collect()
    }

    /// The chronologically next entry (newer than the given one).
    pub fn next_after(&self, slug: &str) -> Option<&Entry> {
        let index = self.entries.iter().position(|entry| entry.slug == slug)?;
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The chronologically previous entry (older than the given one).
    pub fn previous_before(&self, slug: &str) -> Option<&Entry> {
        let index = self.entries.iter().position(|entry| entry.slug == slug)?;
        self.entries.get(index + 1)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
