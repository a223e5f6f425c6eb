//! Display-field resolution across the language fallback chain.

use chrono::{Datelike, NaiveDate};
use shiori_core::{Entry, Field, Lang};

/// Resolve a display field of an entry for the requested language.
///
/// Fixed chain: requested language, then English, then the canonical
/// unsuffixed field, then the empty string. Total over all inputs; the
/// presentation layer never sees a missing value.
pub fn resolve_field(entry: &Entry, field: Field, lang: Lang) -> &str {
    entry.field(field).resolve(lang)
}

/// Format a date in the conventional style of the language.
///
/// English uses "March 25, 2019"; Japanese and Chinese both use the
/// 年/月/日 form.
pub fn format_date(date: NaiveDate, lang: Lang) -> String {
    match lang {
        Lang::En => date.format("%B %-d, %Y").to_string(),
        Lang::Ja | Lang::Zh => {
            format!("{}年{}月{}日", date.year(), date.month(), date.day())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiori_core::{EntryKind, LocalizedText};

    use super::*;

    fn entry() -> Entry {
        Entry::new(
            "intro",
            NaiveDate::from_ymd_opt(2019, 3, 25).unwrap(),
            EntryKind::Post,
        )
        .with_title(LocalizedText::from_parts(
            None,
            Some("Introduction to Ravencoin".to_string()),
            Some("レイブンコインの紹介".to_string()),
            None,
        ))
        .with_summary(LocalizedText::canonical_only("An overview."))
    }

    #[test]
    fn test_exact_language_wins() {
        let entry = entry();
        assert_eq!(
            resolve_field(&entry, Field::Title, Lang::Ja),
            "レイブンコインの紹介"
        );
    }

    #[test]
    fn test_missing_variant_falls_back_to_english() {
        let entry = entry();
        assert_eq!(
            resolve_field(&entry, Field::Title, Lang::Zh),
            "Introduction to Ravencoin"
        );
    }

    #[test]
    fn test_canonical_fallback() {
        let entry = entry();
        assert_eq!(resolve_field(&entry, Field::Summary, Lang::Ja), "An overview.");
    }

    #[test]
    fn test_never_missing() {
        let bare = Entry::new(
            "bare",
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            EntryKind::Post,
        );
        for lang in Lang::ALL {
            assert_eq!(resolve_field(&bare, Field::Title, lang), "");
            assert_eq!(resolve_field(&bare, Field::Summary, lang), "");
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 25).unwrap();
        assert_eq!(format_date(date, Lang::En), "March 25, 2019");
        assert_eq!(format_date(date, Lang::Ja), "2019年3月25日");
        assert_eq!(format_date(date, Lang::Zh), "2019年3月25日");
    }
}
