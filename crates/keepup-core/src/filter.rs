//! Entry filtering by category and free-text query.
//!
//! Daily digests hold tens of entries, so every change of filter simply
//! rescans the list; there is no index.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::locale::Locale;
use crate::models::{CategoryFilter, DayDigest, DigestEntry};
use crate::paginate::{Page, paginate};

/// The toolbar state applied to a day's entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryQuery {
    pub category: CategoryFilter,
    pub text: String,
}

impl EntryQuery {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// True when neither a category nor any search text is active.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.text.trim().is_empty()
    }

    /// Whether `entry` passes this query in `locale`.
    pub fn matches(&self, entry: &DigestEntry, locale: Locale) -> bool {
        self.matcher().matches(entry, locale)
    }

    fn matcher(&self) -> Matcher<'_> {
        let needle = fold(self.text.trim());
        Matcher {
            category: &self.category,
            needle,
        }
    }
}

/// A query with its search text folded once up front.
struct Matcher<'q> {
    category: &'q CategoryFilter,
    needle: String,
}

impl Matcher<'_> {
    fn matches(&self, entry: &DigestEntry, locale: Locale) -> bool {
        if !self.category.accepts(&entry.category) {
            return false;
        }

        if self.needle.is_empty() {
            return true;
        }

        fold(entry.title(locale)).contains(&self.needle)
            || fold(entry.body(locale)).contains(&self.needle)
    }
}

/// Lowercase and strip diacritics so `seguranca` finds `Segurança`.
///
/// This is wider than a plain case-insensitive match: `cafe` also finds
/// `café`, and the reverse.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Entries passing `query`, in document order.
pub fn filter_entries<'a>(
    entries: &'a [DigestEntry],
    query: &EntryQuery,
    locale: Locale,
) -> Vec<&'a DigestEntry> {
    let matcher = query.matcher();
    entries
        .iter()
        .filter(|entry| matcher.matches(entry, locale))
        .collect()
}

/// What the entry list area should show.
#[derive(Debug, PartialEq)]
pub enum DigestView<'a> {
    /// The day has no entries at all.
    NoData,
    /// The day has entries but none pass the current filters.
    NoMatch,
    /// A page of matching entries.
    Entries(Page<&'a DigestEntry>),
}

impl DigestView<'_> {
    pub fn is_empty_state(&self) -> bool {
        !matches!(self, Self::Entries(_))
    }
}

/// Filter and paginate a day's entries, distinguishing the two empty states.
pub fn view_digest<'a>(
    digest: &'a DayDigest,
    query: &EntryQuery,
    locale: Locale,
    page: usize,
    per_page: usize,
) -> DigestView<'a> {
    if digest.is_empty() {
        return DigestView::NoData;
    }

    let matching = filter_entries(&digest.entries, query, locale);
    if matching.is_empty() {
        return DigestView::NoMatch;
    }

    DigestView::Entries(paginate(matching, page, per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn entry(category: &str, title: &str, body: &str) -> DigestEntry {
        DigestEntry {
            title_en: title.to_string(),
            body_en: body.to_string(),
            category: Category::from_tag(category),
            ..Default::default()
        }
    }

    fn sample() -> Vec<DigestEntry> {
        vec![
            entry("ai", "Small models win", "Distillation keeps getting better."),
            entry("web", "Rust on the frontend", "Leptos ships signals."),
            entry("web", "CSS nesting lands", "All browsers now support it."),
            entry("languages", "Go 1.26", "The **Rust** community reacts too."),
        ]
    }

    fn titles(entries: &[&DigestEntry]) -> Vec<String> {
        entries.iter().map(|e| e.title_en.clone()).collect()
    }

    #[test]
    fn test_category_filter_keeps_only_that_category() {
        let entries = sample();
        for text in ["", "rust", "zzz-nothing"] {
            let query = EntryQuery::new(CategoryFilter::parse("web"), text);
            let kept = filter_entries(&entries, &query, Locale::En);
            assert!(kept.iter().all(|e| e.category == Category::Web));
        }
        let query = EntryQuery::new(CategoryFilter::parse("web"), "");
        assert_eq!(filter_entries(&entries, &query, Locale::En).len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive_over_title_and_body() {
        let entries = sample();
        let query = EntryQuery::new(CategoryFilter::All, "rust");
        let kept = filter_entries(&entries, &query, Locale::En);
        assert_eq!(
            titles(&kept),
            vec!["Rust on the frontend".to_string(), "Go 1.26".to_string()]
        );
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let entries = sample();
        let query = EntryQuery::new(CategoryFilter::All, "   ");
        assert!(query.is_unfiltered());
        assert_eq!(filter_entries(&entries, &query, Locale::En).len(), 4);
    }

    #[test]
    fn test_query_uses_localized_text() {
        let mut localized = entry("security", "Supply chain attack", "Patch now.");
        localized.title_pt = "Ataque à cadeia de suprimentos".to_string();
        localized.body_pt = "Segurança em primeiro lugar.".to_string();

        let query = EntryQuery::new(CategoryFilter::All, "seguranca");
        assert!(query.matches(&localized, Locale::Pt));
        assert!(!query.matches(&localized, Locale::En));

        let query = EntryQuery::new(CategoryFilter::All, "patch");
        assert!(query.matches(&localized, Locale::En));
        assert!(!query.matches(&localized, Locale::Pt));
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Segurança"), "seguranca");
        assert_eq!(fold("ÁRVORE"), "arvore");
        assert_eq!(fold("Rust"), "rust");
    }

    #[test]
    fn test_no_data_versus_no_match() {
        let empty = DayDigest::default();
        let query = EntryQuery::default();
        assert_eq!(
            view_digest(&empty, &query, Locale::En, 1, 10),
            DigestView::NoData
        );

        let day = DayDigest {
            entries: sample(),
            ..Default::default()
        };
        let query = EntryQuery::new(CategoryFilter::parse("career"), "");
        assert_eq!(
            view_digest(&day, &query, Locale::En, 1, 10),
            DigestView::NoMatch
        );
        assert!(view_digest(&day, &query, Locale::En, 1, 10).is_empty_state());
    }

    #[test]
    fn test_view_paginates_matches() {
        let day = DayDigest {
            entries: sample(),
            ..Default::default()
        };
        let query = EntryQuery::default();
        match view_digest(&day, &query, Locale::En, 2, 3) {
            DigestView::Entries(page) => {
                assert_eq!(page.number, 2);
                assert_eq!(page.total_items, 4);
                assert_eq!(titles(&page.items), vec!["Go 1.26".to_string()]);
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }
}
