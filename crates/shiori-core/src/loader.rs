//! The content-loading boundary.
//!
//! Entry bodies are large and loaded on demand. The loader is an external
//! collaborator; the pipeline itself only ever sees `Option<&str>` through
//! [`crate::entry::Entry::body`].

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::lang::Lang;

/// Errors from the content-loading collaborator.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No content exists for the slug in any language.
    #[error("no content for slug `{slug}`")]
    NotFound { slug: String },

    /// Content exists but could not be produced.
    #[error("content for `{slug}` unavailable: {reason}")]
    Unavailable { slug: String, reason: String },
}

/// Provider of entry body text.
pub trait ContentLoader {
    /// Load the body for `slug` in the given language.
    fn load(&self, slug: &str, lang: Lang) -> Result<String, LoadError>;
}

/// Load a body in the requested language, falling back to English.
///
/// The English fallback mirrors the display-field chain; if English fails
/// too, the original error is surfaced to the caller.
pub fn load_with_fallback(
    loader: &dyn ContentLoader,
    slug: &str,
    lang: Lang,
) -> Result<String, LoadError> {
    match loader.load(slug, lang) {
        Ok(body) => Ok(body),
        Err(err) if lang != Lang::En => {
            debug!(slug, lang = lang.as_str(), %err, "falling back to English content");
            loader.load(slug, Lang::En)
        }
        Err(err) => Err(err),
    }
}

/// In-memory loader over content bundled at build time.
#[derive(Debug, Default)]
pub struct StaticLoader {
    bodies: HashMap<(String, Lang), String>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body for a slug and language.
    pub fn insert(&mut self, slug: impl Into<String>, lang: Lang, body: impl Into<String>) {
        self.bodies.insert((slug.into(), lang), body.into());
    }
}

impl ContentLoader for StaticLoader {
    fn load(&self, slug: &str, lang: Lang) -> Result<String, LoadError> {
        self.bodies
            .get(&(slug.to_string(), lang))
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                slug: slug.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> StaticLoader {
        let mut loader = StaticLoader::new();
        loader.insert("intro", Lang::En, "English body");
        loader.insert("intro", Lang::Ja, "日本語の本文");
        loader.insert("english-only", Lang::En, "Only in English");
        loader
    }

    #[test]
    fn test_load_exact_language() {
        let loader = loader();
        assert_eq!(
            load_with_fallback(&loader, "intro", Lang::Ja).unwrap(),
            "日本語の本文"
        );
    }

    #[test]
    fn test_load_falls_back_to_english() {
        let loader = loader();
        assert_eq!(
            load_with_fallback(&loader, "english-only", Lang::Zh).unwrap(),
            "Only in English"
        );
    }

    #[test]
    fn test_load_missing_slug() {
        let loader = loader();
        let err = load_with_fallback(&loader, "missing", Lang::En).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { slug } if slug == "missing"));
    }
}
