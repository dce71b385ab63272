//! Hash-based routing.

use keepup_core::DigestDate;

use crate::utils::dom;

/// Application routes for hash-based navigation.
/// URL format: `#/` for the latest day, `#/YYYY-MM-DD` for a specific day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Latest published day: `#/` or empty hash
    Latest,
    /// A specific day: `#/2026-10-18`
    Day(DigestDate),
}

impl Route {
    /// Parse URL hash into Route.
    ///
    /// Anything that is not a well-formed date reads as [`Route::Latest`].
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');

        match DigestDate::parse(path) {
            Ok(date) => Self::Day(date),
            Err(_) => Self::Latest,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Latest => "#/".to_string(),
            Self::Day(date) => format!("#/{}", date),
        }
    }

    /// Requested date, if any.
    pub fn date(&self) -> Option<DigestDate> {
        match self {
            Self::Latest => None,
            Self::Day(date) => Some(*date),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route (pushes a history entry and fires `hashchange`).
    pub fn navigate(&self) {
        dom::set_hash(&self.to_hash());
    }
}
