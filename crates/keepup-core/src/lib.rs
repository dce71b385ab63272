//! Domain logic for the keep-up-daily reader.
//!
//! Everything here is target-independent so it can be shared by the web app
//! (compiled to WASM) and the native previewer CLI:
//!
//! - [`models`] - The external JSON contract (date index, day documents, entries)
//! - [`markdown`] - Constrained markdown subset to sanitized HTML
//! - [`filter`] - Category and free-text filtering, empty-state classification
//! - [`paginate`] - Fixed-size paging over filtered entries
//! - [`locale`], [`theme`] - The two persisted user preferences
//! - [`url`] - Link safety checks for source citations

pub mod error;
pub mod filter;
pub mod locale;
pub mod markdown;
pub mod models;
pub mod paginate;
pub mod theme;
pub mod url;

pub use error::DigestError;
pub use filter::{DigestView, EntryQuery, filter_entries, view_digest};
pub use locale::{Locale, UiText};
pub use markdown::{render_inline, render_markdown};
pub use models::{
    Category, CategoryFilter, DayDigest, DigestDate, DigestEntry, DigestIndex, SourceCitation,
};
pub use paginate::{Page, paginate};
pub use theme::Theme;
pub use url::{UrlValidation, UrlValidationError, validate_link_url};
