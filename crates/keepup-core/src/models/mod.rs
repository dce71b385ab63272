//! Data models for the digest documents produced by the external pipeline.
//!
//! - [`DigestIndex`] - `index.json`, the list of days that have a digest
//! - [`DayDigest`], [`DigestEntry`], [`SourceCitation`] - one day's document
//! - [`DigestDate`] - Validated calendar date used as the document key
//! - [`Category`], [`CategoryFilter`] - Topic tags and the active filter

mod category;
mod date;
mod digest;

pub use category::{Category, CategoryFilter};
pub use date::DigestDate;
pub use digest::{DayDigest, DigestEntry, DigestIndex, SourceCitation};
