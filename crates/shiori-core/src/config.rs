//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    lang::Lang,
};

/// Site-wide configuration, loaded once from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Default language code.
    #[serde(default = "default_language")]
    pub default_language: Lang,

    /// List of supported languages.
    #[serde(default = "default_languages")]
    pub languages: Vec<Lang>,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

fn default_language() -> Lang {
    Lang::En
}

fn default_languages() -> Vec<Lang> {
    Lang::ALL.to_vec()
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(CoreError::config("site title must not be empty"));
        }
        if !self.languages.contains(&self.default_language) {
            return Err(CoreError::config(format!(
                "default language `{}` is not in the language list",
                self.default_language
            )));
        }
        Ok(())
    }

    /// Whether the site serves content in the given language.
    pub fn is_supported(&self, lang: Lang) -> bool {
        self.languages.contains(&lang)
    }
}
