//! Supported languages and locale detection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language supported by the site.
///
/// The set is closed. Every fallback chain ends at [`Lang::En`], then at the
/// canonical unsuffixed field, then at the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English (default and universal fallback).
    En,
    /// Japanese.
    Ja,
    /// Simplified Chinese.
    Zh,
}

/// Error for language codes outside the supported set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLang(pub String);

impl Lang {
    /// All supported languages, in picker display order.
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Ja, Lang::Zh];

    /// The language code used for field suffixes and the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
            Lang::Zh => "zh",
        }
    }

    /// Native-script display name for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ja => "日本語",
            Lang::Zh => "简体中文",
        }
    }

    /// Derive a language from a BCP 47 locale tag such as `ja-JP`.
    ///
    /// Only the primary subtag is considered. Unsupported locales yield
    /// `None`; the caller decides the default.
    pub fn from_locale(locale: &str) -> Option<Lang> {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);
        primary.to_ascii_lowercase().parse().ok()
    }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "ja" => Ok(Lang::Ja),
            "zh" => Ok(Lang::Zh),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse(), Ok(Lang::En));
        assert_eq!("ja".parse(), Ok(Lang::Ja));
        assert_eq!("zh".parse(), Ok(Lang::Zh));
        assert!("fr".parse::<Lang>().is_err());
        assert!("EN".parse::<Lang>().is_err());
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Lang::from_locale("ja-JP"), Some(Lang::Ja));
        assert_eq!(Lang::from_locale("zh_CN"), Some(Lang::Zh));
        assert_eq!(Lang::from_locale("en"), Some(Lang::En));
        assert_eq!(Lang::from_locale("fr-FR"), None);
        assert_eq!(Lang::from_locale(""), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Lang::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let lang: Lang = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(lang, Lang::Zh);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Lang::En.native_name(), "English");
        assert_eq!(Lang::Ja.native_name(), "日本語");
        assert_eq!(Lang::Zh.native_name(), "简体中文");
    }
}
