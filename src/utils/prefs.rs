//! The two persisted user preferences: language and theme.
//!
//! Both live in localStorage as plain tags. Unreadable or unknown values
//! are ignored so a corrupted entry falls back to the defaults.

use keepup_core::{Locale, Theme};

use super::dom;
use crate::config::prefs::{LOCALE_KEY, THEME_KEY};
use crate::error::StorageError;

fn read(key: &str) -> Option<String> {
    dom::local_storage()?.get_item(key).ok()?
}

fn write(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(key, value)
        .map_err(|_| StorageError::WriteFailed)
}

pub fn load_locale() -> Option<Locale> {
    read(LOCALE_KEY).and_then(|tag| Locale::parse(&tag).ok())
}

pub fn save_locale(locale: Locale) -> Result<(), StorageError> {
    write(LOCALE_KEY, locale.tag())
}

/// Stored language, else the browser's, else English.
pub fn initial_locale() -> Locale {
    load_locale().unwrap_or_else(|| {
        Locale::from_browser_language(&dom::navigator_language().unwrap_or_default())
    })
}

pub fn load_theme() -> Option<Theme> {
    read(THEME_KEY).and_then(|tag| Theme::parse(&tag).ok())
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    write(THEME_KEY, theme.tag())
}
