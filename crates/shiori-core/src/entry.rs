//! Content entities: blog posts and project case studies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// Words per minute assumed for reading-time estimates.
const READING_WPM: usize = 200;

/// A display field with per-language variants.
///
/// The variant map is built once when the entity is loaded; lookups never
/// probe dynamic properties. Empty strings are treated as absent so the
/// fallback chain always lands on real text or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    en: Option<String>,
    ja: Option<String>,
    zh: Option<String>,
    canonical: Option<String>,
}

impl LocalizedText {
    /// Build from the suffixed-field family of an entity.
    pub fn from_parts(
        canonical: Option<String>,
        en: Option<String>,
        ja: Option<String>,
        zh: Option<String>,
    ) -> Self {
        Self {
            en: non_empty(en),
            ja: non_empty(ja),
            zh: non_empty(zh),
            canonical: non_empty(canonical),
        }
    }

    /// A field with only the canonical (untranslated) value.
    pub fn canonical_only(value: impl Into<String>) -> Self {
        Self::from_parts(Some(value.into()), None, None, None)
    }

    /// The variant for exactly this language, if present.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        match lang {
            Lang::En => self.en.as_deref(),
            Lang::Ja => self.ja.as_deref(),
            Lang::Zh => self.zh.as_deref(),
        }
    }

    /// The canonical unsuffixed value, if present.
    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Whether any language-specific variant exists.
    pub fn has_localized(&self) -> bool {
        self.en.is_some() || self.ja.is_some() || self.zh.is_some()
    }

    /// All present language-specific variants.
    pub fn localized(&self) -> impl Iterator<Item = (Lang, &str)> {
        Lang::ALL
            .into_iter()
            .filter_map(|lang| self.get(lang).map(|value| (lang, value)))
    }

    /// Resolve for a language along the fixed fallback chain:
    /// requested language, then English, then the canonical value, then `""`.
    pub fn resolve(&self, lang: Lang) -> &str {
        self.get(lang)
            .or_else(|| self.get(Lang::En))
            .or_else(|| self.canonical())
            .unwrap_or("")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The two families of content entities in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Blog post.
    Post,
    /// Project case study.
    Project,
}

/// Display fields that carry per-language variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Summary,
}

/// An author credit. Opaque to the search/localization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
}

/// A single content entity: one post or one project.
///
/// Immutable after load. The `slug` is the stable external key and is never
/// regenerated. The body is absent until explicitly attached by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    pub slug: String,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub tags: Vec<String>,
    pub authors: Vec<Author>,
    title: LocalizedText,
    summary: LocalizedText,
    body: Option<String>,
}

impl Entry {
    /// Create an entry with empty display fields, for incremental build-up.
    pub fn new(slug: impl Into<String>, date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            slug: slug.into(),
            date,
            kind,
            tags: Vec::new(),
            authors: Vec::new(),
            title: LocalizedText::default(),
            summary: LocalizedText::default(),
            body: None,
        }
    }

    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    pub fn with_summary(mut self, summary: LocalizedText) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    /// Attach a loaded body, consuming the entry.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn title(&self) -> &LocalizedText {
        &self.title
    }

    pub fn summary(&self) -> &LocalizedText {
        &self.summary
    }

    /// Lookup a display field by name.
    pub fn field(&self, field: Field) -> &LocalizedText {
        match field {
            Field::Title => &self.title,
            Field::Summary => &self.summary,
        }
    }

    /// The loaded body text, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Estimated reading time of the body in minutes, if loaded.
    pub fn reading_time(&self) -> Option<u32> {
        self.body().map(reading_time_minutes)
    }
}

/// Estimated reading time in minutes, never below one.
pub fn reading_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    (words.div_ceil(READING_WPM)).max(1) as u32
}

/// The authored shape of an entity: a flat record with optional
/// per-language suffixed fields, as written in the data files.
#[derive(Debug, Clone, Deserialize)]
struct RawEntry {
    slug: String,
    date: NaiveDate,
    #[serde(default = "default_kind")]
    kind: EntryKind,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    title_en: Option<String>,
    #[serde(default)]
    title_ja: Option<String>,
    #[serde(default)]
    title_zh: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    summary_en: Option<String>,
    #[serde(default)]
    summary_ja: Option<String>,
    #[serde(default)]
    summary_zh: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    content: Option<String>,
}

fn default_kind() -> EntryKind {
    EntryKind::Post
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            slug: raw.slug,
            date: raw.date,
            kind: raw.kind,
            tags: raw.tags,
            authors: raw.authors,
            title: LocalizedText::from_parts(raw.title, raw.title_en, raw.title_ja, raw.title_zh),
            summary: LocalizedText::from_parts(
                raw.summary,
                raw.summary_en,
                raw.summary_ja,
                raw.summary_zh,
            ),
            body: raw.content.filter(|c| !c.is_empty()),
        }
    }
}
