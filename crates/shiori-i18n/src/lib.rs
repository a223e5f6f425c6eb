//! Shiori I18n Library
//!
//! Localization for the trilingual (English/Japanese/Chinese) site:
//! display-field resolution along the fixed fallback chain, tag and
//! UI-string translation tables, and the persisted language preference.
//!
//! The requested language is always threaded explicitly through calls;
//! there is no ambient current-language state.

pub mod preference;
pub mod resolver;
pub mod translations;

pub use preference::{
    FileStore, LANGUAGE_KEY, MemoryStore, PreferenceStore, initial_language, persist_language,
};
pub use resolver::{format_date, resolve_field};
pub use translations::{TranslationError, TranslationTable};
