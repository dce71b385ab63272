//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use keepup_core::DigestDate;

// =============================================================================
// Data Location
// =============================================================================

/// Base URL of the published digest documents, relative to the page.
pub const DATA_BASE_URL: &str = "data";

/// Index document listing the available days.
pub const INDEX_FILE: &str = "index.json";

/// URL of the date index.
pub fn index_url() -> String {
    format!("{}/{}", DATA_BASE_URL, INDEX_FILE)
}

/// URL of one day's digest document.
pub fn day_url(date: DigestDate) -> String {
    format!("{}/{}.json", DATA_BASE_URL, date)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Listing Configuration
// =============================================================================

/// Entries shown per page.
pub const PAGE_SIZE: usize = 10;

/// Delay between the last keystroke and re-filtering, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 200;

/// DOM id of the search box (target of the `/` shortcut).
pub const SEARCH_INPUT_ID: &str = "digest-search";

// =============================================================================
// Preferences
// =============================================================================

/// localStorage keys for the persisted preferences.
pub mod prefs {
    /// Interface/content language (`en` or `pt-BR`).
    pub const LOCALE_KEY: &str = "keepup.lang";
    /// Color theme (`light` or `dark`).
    pub const THEME_KEY: &str = "keepup.theme";
}

/// Media query used when no theme has been chosen yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    use keepup_core::DigestDate;

    /// sessionStorage key prefix for day documents.
    pub const DAY_KEY_PREFIX: &str = "keepup.day.";

    /// sessionStorage key for one day's document.
    pub fn day_key(date: DigestDate) -> String {
        format!("{}{}", DAY_KEY_PREFIX, date)
    }
}
