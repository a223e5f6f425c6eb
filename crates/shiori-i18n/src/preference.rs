//! The persisted language preference.
//!
//! The site keeps exactly one persisted value: the reader's language
//! choice, stored under a fixed key. Absence falls back to a
//! locale-derived guess constrained to the supported set, then English.

use std::{collections::HashMap, fs, path::PathBuf};

use shiori_core::Lang;
use tracing::{debug, warn};

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// A small string key-value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Volatile in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store.
///
/// A preference is never worth failing over: unreadable files yield an
/// empty store and write failures are logged and dropped.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path, loading existing values if any.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn flush(&self) {
        match serde_json::to_string_pretty(&self.values) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), %err, "could not persist preferences");
                }
            }
            Err(err) => warn!(%err, "could not serialize preferences"),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// The language to start the session with.
///
/// Order: a saved preference in the supported set, else a guess derived
/// from the locale hint, else English.
pub fn initial_language(store: &dyn PreferenceStore, locale_hint: Option<&str>) -> Lang {
    if let Some(saved) = store.get(LANGUAGE_KEY)
        && let Ok(lang) = saved.parse()
    {
        return lang;
    }
    locale_hint.and_then(Lang::from_locale).unwrap_or(Lang::En)
}

/// Record a language change. Written on every change.
pub fn persist_language(store: &mut dyn PreferenceStore, lang: Lang) {
    debug!(lang = lang.as_str(), "language preference changed");
    store.set(LANGUAGE_KEY, lang.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_preference_wins() {
        let mut store = MemoryStore::new();
        persist_language(&mut store, Lang::Zh);
        assert_eq!(initial_language(&store, Some("ja-JP")), Lang::Zh);
    }

    #[test]
    fn test_locale_hint_when_nothing_saved() {
        let store = MemoryStore::new();
        assert_eq!(initial_language(&store, Some("ja-JP")), Lang::Ja);
        assert_eq!(initial_language(&store, Some("zh_CN")), Lang::Zh);
    }

    #[test]
    fn test_unsupported_everything_defaults_to_english() {
        let store = MemoryStore::new();
        assert_eq!(initial_language(&store, Some("fr-FR")), Lang::En);
        assert_eq!(initial_language(&store, None), Lang::En);
    }

    #[test]
    fn test_corrupt_saved_value_falls_through() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon");
        assert_eq!(initial_language(&store, Some("ja")), Lang::Ja);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("preferences.json");

        let mut store = FileStore::open(&path);
        persist_language(&mut store, Lang::Ja);

        let reopened = FileStore::open(&path);
        assert_eq!(initial_language(&reopened, None), Lang::Ja);
    }

    #[test]
    fn test_file_store_unreadable_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json at all").expect("write garbage");

        let store = FileStore::open(&path);
        assert_eq!(initial_language(&store, None), Lang::En);
    }
}
