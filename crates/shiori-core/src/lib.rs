//! Shiori Core Library
//!
//! Content model, collection operations, content loading and site
//! configuration for the Shiori portfolio/blog.

pub mod collection;
pub mod config;
pub mod entry;
pub mod error;
pub mod lang;
pub mod loader;

pub use collection::Collection;
pub use config::SiteConfig;
pub use entry::{Author, Entry, EntryKind, Field, LocalizedText, reading_time_minutes};
pub use error::{CoreError, Result};
pub use lang::Lang;
pub use loader::{ContentLoader, LoadError, StaticLoader, load_with_fallback};
