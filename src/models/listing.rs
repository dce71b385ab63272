//! What the entry area renders, derived from load state and filters.

use keepup_core::{DayDigest, DigestEntry, DigestIndex, DigestView, EntryQuery, Locale, Page};
use keepup_core::view_digest;

use super::LoadState;

/// Render state of the entry list.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Loading,
    Failed(String),
    /// Nothing was published (empty index or empty day).
    NoData,
    /// The day has entries but the filters exclude all of them.
    NoMatch,
    Entries(Page<DigestEntry>),
}

impl Listing {
    /// Combine the index and day load states with the active filters.
    ///
    /// An index failure wins over the day state, and an empty index means
    /// there is no day to wait for.
    pub fn build(
        index: &LoadState<DigestIndex>,
        day: &LoadState<DayDigest>,
        query: &EntryQuery,
        locale: Locale,
        page: usize,
        per_page: usize,
    ) -> Self {
        match index {
            LoadState::Loading => return Self::Loading,
            LoadState::Failed(msg) => return Self::Failed(msg.clone()),
            LoadState::Ready(index) if index.is_empty() => return Self::NoData,
            LoadState::Ready(_) => {}
        }

        match day {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(msg) => Self::Failed(msg.clone()),
            LoadState::Ready(digest) => match view_digest(digest, query, locale, page, per_page) {
                DigestView::NoData => Self::NoData,
                DigestView::NoMatch => Self::NoMatch,
                DigestView::Entries(page) => Self::Entries(Page {
                    items: page.items.into_iter().cloned().collect(),
                    number: page.number,
                    total_pages: page.total_pages,
                    total_items: page.total_items,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepup_core::{Category, CategoryFilter, DigestDate};

    fn index(dates: &[&str]) -> LoadState<DigestIndex> {
        let dates = dates.iter().map(|d| DigestDate::parse(d).unwrap()).collect();
        LoadState::Ready(DigestIndex::new(dates, None))
    }

    fn day(entries: &[(&str, &str)]) -> LoadState<DayDigest> {
        LoadState::Ready(DayDigest {
            entries: entries
                .iter()
                .map(|(category, title)| DigestEntry {
                    title_en: title.to_string(),
                    category: Category::from_tag(category),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
    }

    fn build(index: &LoadState<DigestIndex>, day: &LoadState<DayDigest>, query: &EntryQuery) -> Listing {
        Listing::build(index, day, query, Locale::En, 1, 10)
    }

    #[test]
    fn test_loading_until_both_documents_arrive() {
        let query = EntryQuery::default();
        assert_eq!(build(&LoadState::Loading, &LoadState::Loading, &query), Listing::Loading);
        assert_eq!(build(&index(&["2026-10-18"]), &LoadState::Loading, &query), Listing::Loading);
    }

    #[test]
    fn test_index_failure_wins() {
        let failed = LoadState::Failed("Request timed out".to_string());
        assert_eq!(
            build(&failed, &day(&[("ai", "x")]), &EntryQuery::default()),
            Listing::Failed("Request timed out".to_string())
        );
    }

    #[test]
    fn test_empty_index_is_no_data() {
        assert_eq!(build(&index(&[]), &LoadState::Loading, &EntryQuery::default()), Listing::NoData);
    }

    #[test]
    fn test_empty_states_are_distinct() {
        let idx = index(&["2026-10-18"]);
        assert_eq!(build(&idx, &day(&[]), &EntryQuery::default()), Listing::NoData);

        let query = EntryQuery::new(CategoryFilter::parse("security"), "");
        assert_eq!(build(&idx, &day(&[("ai", "Models")]), &query), Listing::NoMatch);
    }

    #[test]
    fn test_entries_page() {
        let idx = index(&["2026-10-18"]);
        let query = EntryQuery::new(CategoryFilter::parse("web"), "");
        match build(&idx, &day(&[("ai", "Models"), ("web", "Browsers")]), &query) {
            Listing::Entries(page) => {
                assert_eq!(page.total_items, 1);
                assert_eq!(page.items[0].title_en, "Browsers");
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }
}
