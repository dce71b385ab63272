//! Date index and per-day digest documents.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Category, DigestDate};
use crate::error::DigestError;
use crate::locale::Locale;

// =============================================================================
// Date Index
// =============================================================================

/// Wire shape of `index.json` before validation.
#[derive(Deserialize)]
struct RawIndex {
    #[serde(default)]
    dates: Vec<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

/// List of days for which a digest document exists, newest first.
///
/// The order and contents of the file are not trusted: dates are sorted,
/// deduplicated, and anything that is not a valid `YYYY-MM-DD` is moved to
/// [`DigestIndex::rejected`] instead of failing the whole document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIndex")]
pub struct DigestIndex {
    pub dates: Vec<DigestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Raw values that could not be parsed as dates.
    #[serde(skip)]
    pub rejected: Vec<String>,
}

impl From<RawIndex> for DigestIndex {
    fn from(raw: RawIndex) -> Self {
        let mut dates = Vec::with_capacity(raw.dates.len());
        let mut rejected = Vec::new();

        for value in raw.dates {
            match DigestDate::parse(value.trim()) {
                Ok(date) => dates.push(date),
                Err(_) => rejected.push(value),
            }
        }

        Self::new(dates, raw.updated_at).with_rejected(rejected)
    }
}

impl DigestIndex {
    /// Build an index from dates in any order.
    pub fn new(mut dates: Vec<DigestDate>, updated_at: Option<String>) -> Self {
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Self {
            dates,
            updated_at,
            rejected: Vec::new(),
        }
    }

    fn with_rejected(mut self, rejected: Vec<String>) -> Self {
        self.rejected = rejected;
        self
    }

    /// Parse `index.json` text.
    pub fn from_json(text: &str) -> Result<Self, DigestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Most recent day with a digest.
    pub fn latest(&self) -> Option<DigestDate> {
        self.dates.first().copied()
    }

    pub fn contains(&self, date: DigestDate) -> bool {
        self.dates.binary_search_by(|probe| date.cmp(probe)).is_ok()
    }

    /// The day before `date` that has a digest (older).
    pub fn previous(&self, date: DigestDate) -> Option<DigestDate> {
        let idx = self.position(date)?;
        self.dates.get(idx + 1).copied()
    }

    /// The day after `date` that has a digest (newer).
    pub fn next(&self, date: DigestDate) -> Option<DigestDate> {
        let idx = self.position(date)?;
        idx.checked_sub(1).and_then(|i| self.dates.get(i).copied())
    }

    /// Resolve a requested day, falling back to the latest one when the
    /// request is absent or not listed.
    pub fn resolve(&self, requested: Option<DigestDate>) -> Option<DigestDate> {
        requested
            .filter(|date| self.contains(*date))
            .or_else(|| self.latest())
    }

    fn position(&self, date: DigestDate) -> Option<usize> {
        self.dates.binary_search_by(|probe| date.cmp(probe)).ok()
    }
}

// =============================================================================
// Day Document
// =============================================================================

/// One day's digest document (`<date>.json`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayDigest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DigestDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Raw articles the pipeline scanned before curation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_articles: u64,
    /// Raw article count per aggregator.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_counts: BTreeMap<String, u64>,
    /// Aggregators that contributed to the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
    #[serde(default, rename = "digest", deserialize_with = "null_as_default")]
    pub entries: Vec<DigestEntry>,
}

impl DayDigest {
    /// Parse a day document.
    pub fn from_json(text: &str) -> Result<Self, DigestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// True when the pipeline produced no entries for the day.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct aggregators, from whichever field lists more.
    pub fn source_total(&self) -> usize {
        self.sources.len().max(self.source_counts.len())
    }

    /// Entry count per category present in the day, in display order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();

        for entry in &self.entries {
            match counts.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.category.clone(), 1)),
            }
        }

        counts.sort_by(|(a, _), (b, _)| a.rank().cmp(&b.rank()).then_with(|| a.tag().cmp(b.tag())));
        counts
    }
}

/// One curated topic summary with bilingual text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DigestEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_pt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_pt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<SourceCitation>,
}

impl DigestEntry {
    /// Title in `locale`; Portuguese falls back to English when blank.
    pub fn title(&self, locale: Locale) -> &str {
        localized(&self.title_en, &self.title_pt, locale)
    }

    /// Markdown body in `locale`; Portuguese falls back to English when blank.
    pub fn body(&self, locale: Locale) -> &str {
        localized(&self.body_en, &self.body_pt, locale)
    }

    /// Emoji from the document, or the category's default.
    pub fn display_emoji(&self) -> &str {
        let emoji = self.emoji.trim();
        if emoji.is_empty() {
            self.category.emoji()
        } else {
            emoji
        }
    }
}

fn localized<'a>(en: &'a str, pt: &'a str, locale: Locale) -> &'a str {
    match locale {
        Locale::Pt if !pt.trim().is_empty() => pt,
        _ => en,
    }
}

/// Link back to an original article, tagged with its aggregator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl SourceCitation {
    /// Display name of the aggregator the article was found on.
    pub fn source_label(&self) -> Cow<'_, str> {
        match self.source.trim() {
            "devto" => Cow::Borrowed("DEV Community"),
            "hackernews" => Cow::Borrowed("Hacker News"),
            "github_trending" => Cow::Borrowed("GitHub Trending"),
            "reddit" => Cow::Borrowed("Reddit"),
            "lobsters" => Cow::Borrowed("Lobsters"),
            "hashnode" => Cow::Borrowed("Hashnode"),
            other => Cow::Owned(title_case(other)),
        }
    }
}

/// `sao_paulo_rss` -> `Sao Paulo Rss`
fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DigestDate {
        DigestDate::parse(s).unwrap()
    }

    #[test]
    fn test_index_normalizes_order_and_duplicates() {
        let index = DigestIndex::from_json(
            r#"{"dates": ["2026-10-16", "2026-10-18", "2026-10-17", "2026-10-18", "soon"]}"#,
        )
        .unwrap();
        assert_eq!(
            index.dates,
            vec![date("2026-10-18"), date("2026-10-17"), date("2026-10-16")]
        );
        assert_eq!(index.rejected, vec!["soon".to_string()]);
        assert_eq!(index.latest(), Some(date("2026-10-18")));
    }

    #[test]
    fn test_index_neighbours() {
        let index = DigestIndex::new(
            vec![date("2026-10-14"), date("2026-10-16"), date("2026-10-18")],
            None,
        );
        let mid = date("2026-10-16");
        assert_eq!(index.previous(mid), Some(date("2026-10-14")));
        assert_eq!(index.next(mid), Some(date("2026-10-18")));
        assert_eq!(index.next(date("2026-10-18")), None);
        assert_eq!(index.previous(date("2026-10-14")), None);
        assert_eq!(index.previous(date("2026-10-15")), None);
    }

    #[test]
    fn test_index_resolve_falls_back_to_latest() {
        let index = DigestIndex::new(vec![date("2026-10-17"), date("2026-10-18")], None);
        assert_eq!(index.resolve(None), Some(date("2026-10-18")));
        assert_eq!(
            index.resolve(Some(date("2026-10-17"))),
            Some(date("2026-10-17"))
        );
        assert_eq!(
            index.resolve(Some(date("2020-01-01"))),
            Some(date("2026-10-18"))
        );
        assert_eq!(DigestIndex::default().resolve(None), None);
    }

    #[test]
    fn test_day_defaults_for_missing_fields() {
        let day = DayDigest::from_json(r#"{"digest": [{"title_en": "Only a title"}]}"#).unwrap();
        assert_eq!(day.total_articles, 0);
        assert!(day.date.is_none());
        let entry = &day.entries[0];
        assert_eq!(entry.category, Category::General);
        assert_eq!(entry.display_emoji(), "📌");
        assert!(entry.sources.is_empty());
    }

    #[test]
    fn test_missing_digest_is_empty_day() {
        let day = DayDigest::from_json(r#"{"date": "2026-10-18", "total_articles": 12}"#).unwrap();
        assert!(day.is_empty());
        assert_eq!(day.date, Some(date("2026-10-18")));
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let day = DayDigest::from_json(
            r#"{
                "total_articles": null,
                "sources": null,
                "digest": [{
                    "title_en": "A",
                    "title_pt": null,
                    "body_en": "Body",
                    "body_pt": null,
                    "category": null,
                    "emoji": null,
                    "sources": [{"source": "hackernews", "title": null, "url": null}]
                }, {
                    "title_en": "B",
                    "sources": null
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(day.total_articles, 0);
        assert!(day.sources.is_empty());
        let entry = &day.entries[0];
        assert_eq!(entry.title(Locale::Pt), "A");
        assert_eq!(entry.body(Locale::Pt), "Body");
        assert_eq!(entry.display_emoji(), "📌");
        assert_eq!(entry.sources[0].title, "");
        assert_eq!(entry.sources[0].url, "");
        assert!(day.entries[1].sources.is_empty());
    }

    #[test]
    fn test_day_survives_json_round_trip() {
        let day = DayDigest {
            date: Some(date("2026-10-18")),
            generated_at: None,
            total_articles: 87,
            source_counts: BTreeMap::from([("lobsters".to_string(), 12)]),
            sources: vec!["lobsters".to_string()],
            entries: vec![
                DigestEntry {
                    title_en: "Quantum compilers".to_string(),
                    body_en: "**New** toolchain".to_string(),
                    category: Category::from_tag("quantum"),
                    ..Default::default()
                },
                DigestEntry {
                    title_en: "Rust 2027".to_string(),
                    title_pt: "Rust 2027".to_string(),
                    category: Category::Languages,
                    emoji: "🦀".to_string(),
                    sources: vec![SourceCitation {
                        source: "reddit".to_string(),
                        title: "Edition plans".to_string(),
                        url: "https://example.com/rust".to_string(),
                    }],
                    ..Default::default()
                },
            ],
        };

        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"digest\""));
        assert!(json.contains("\"quantum\""));
        assert_eq!(DayDigest::from_json(&json).unwrap(), day);
    }

    #[test]
    fn test_malformed_day_is_error() {
        assert!(matches!(
            DayDigest::from_json("{\"digest\": 3}"),
            Err(DigestError::Json(_))
        ));
    }

    #[test]
    fn test_localized_text_falls_back_to_english() {
        let entry = DigestEntry {
            title_en: "Hello".to_string(),
            title_pt: "  ".to_string(),
            body_en: "Body".to_string(),
            body_pt: "Corpo".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.title(Locale::Pt), "Hello");
        assert_eq!(entry.body(Locale::Pt), "Corpo");
        assert_eq!(entry.body(Locale::En), "Body");
    }

    #[test]
    fn test_category_counts_in_display_order() {
        let entry = |tag: &str| DigestEntry {
            category: Category::from_tag(tag),
            ..Default::default()
        };
        let day = DayDigest {
            entries: vec![entry("web"), entry("ai"), entry("web"), entry("zig"), entry("general")],
            ..Default::default()
        };
        assert_eq!(
            day.category_counts(),
            vec![
                (Category::Ai, 1),
                (Category::Web, 2),
                (Category::General, 1),
                (Category::Other("zig".to_string()), 1),
            ]
        );
    }

    #[test]
    fn test_source_labels() {
        let citation = |source: &str| SourceCitation {
            source: source.to_string(),
            ..Default::default()
        };
        assert_eq!(citation("hackernews").source_label(), "Hacker News");
        assert_eq!(citation("devto").source_label(), "DEV Community");
        assert_eq!(citation("sao_paulo_rss").source_label(), "Sao Paulo Rss");
    }

    #[test]
    fn test_source_total_uses_larger_listing() {
        let mut day = DayDigest::default();
        day.sources = vec!["devto".to_string()];
        day.source_counts.insert("devto".to_string(), 3);
        day.source_counts.insert("reddit".to_string(), 9);
        assert_eq!(day.source_total(), 2);
    }
}
