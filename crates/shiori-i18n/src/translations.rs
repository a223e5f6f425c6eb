//! Static translation tables for UI strings and tag display names.
//!
//! Tables are loaded once from per-language JSON documents and never
//! mutated afterwards. Lookups take dotted keys ("nav.blog", "tags.mining");
//! a miss falls back to English, then to the key (or raw tag) itself.

use std::collections::HashMap;

use serde_json::Value;
use shiori_core::Lang;
use thiserror::Error;
use tracing::debug;

/// Errors when loading a translation table.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The locale document is not valid JSON.
    #[error("invalid translation table for `{lang}`: {source}")]
    Parse {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-language nested string tables.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    locales: HashMap<Lang, Value>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale document, replacing any previous table for the language.
    pub fn with_locale(mut self, lang: Lang, json: &str) -> Result<Self, TranslationError> {
        let table: Value =
            serde_json::from_str(json).map_err(|source| TranslationError::Parse { lang, source })?;
        debug!(lang = lang.as_str(), "loaded translation table");
        self.locales.insert(lang, table);
        Ok(self)
    }

    /// Translate a dotted key for the language.
    ///
    /// Falls back to English on a miss; if the key exists nowhere, the key
    /// itself is returned so untranslated UI stays legible.
    pub fn translate(&self, key: &str, lang: Lang) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(Lang::En, key))
            .map(str::to_owned)
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate a dotted key, interpolating `{{name}}` placeholders.
    ///
    /// Placeholders without a matching parameter are left untouched.
    pub fn translate_with(&self, key: &str, lang: Lang, params: &[(&str, &str)]) -> String {
        let mut out = self.translate(key, lang);
        for (name, value) in params {
            out = out.replace(&format!("{{{{{name}}}}}"), value);
        }
        out
    }

    /// Localized display name for a tag.
    ///
    /// Looks up `tags.<tag>` in the requested language, then English; a
    /// total miss returns the raw tag unchanged.
    pub fn resolve_tag(&self, tag: &str, lang: Lang) -> String {
        let key = format!("tags.{tag}");
        self.lookup(lang, &key)
            .or_else(|| self.lookup(Lang::En, &key))
            .map(str::to_owned)
            .unwrap_or_else(|| tag.to_string())
    }

    fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        let mut value = self.locales.get(&lang)?;
        for part in key.split('.') {
            value = value.as_object()?.get(part)?;
        }
        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        TranslationTable::new()
            .with_locale(
                Lang::En,
                r#"{
                    "nav": {"blog": "Blog", "projects": "Projects"},
                    "blog": {"reading_time": "{{minutes}} min read"},
                    "tags": {"blockchain": "Blockchain", "mining": "Mining"}
                }"#,
            )
            .unwrap()
            .with_locale(
                Lang::Ja,
                r#"{
                    "nav": {"blog": "ブログ"},
                    "tags": {"blockchain": "ブロックチェーン"}
                }"#,
            )
            .unwrap()
    }

    #[test]
    fn test_translate_exact() {
        let table = table();
        assert_eq!(table.translate("nav.blog", Lang::Ja), "ブログ");
        assert_eq!(table.translate("nav.blog", Lang::En), "Blog");
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        let table = table();
        assert_eq!(table.translate("nav.projects", Lang::Ja), "Projects");
    }

    #[test]
    fn test_translate_miss_returns_key() {
        let table = table();
        assert_eq!(table.translate("nav.missing", Lang::Zh), "nav.missing");
    }

    #[test]
    fn test_translate_with_params() {
        let table = table();
        assert_eq!(
            table.translate_with("blog.reading_time", Lang::En, &[("minutes", "4")]),
            "4 min read"
        );
        // Unknown placeholders stay as-is.
        assert_eq!(
            table.translate_with("blog.reading_time", Lang::En, &[]),
            "{{minutes}} min read"
        );
    }

    #[test]
    fn test_resolve_tag() {
        let table = table();
        assert_eq!(table.resolve_tag("blockchain", Lang::Ja), "ブロックチェーン");
        // Missing in ja, present in en.
        assert_eq!(table.resolve_tag("mining", Lang::Ja), "Mining");
        // Missing everywhere: raw tag unchanged.
        assert_eq!(table.resolve_tag("ravencoin", Lang::Zh), "ravencoin");
    }

    #[test]
    fn test_invalid_locale_json() {
        let result = TranslationTable::new().with_locale(Lang::En, "{not json");
        assert!(matches!(result, Err(TranslationError::Parse { lang: Lang::En, .. })));
    }
}
