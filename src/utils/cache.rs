//! Caching utilities for network requests.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! A day's digest never changes once published, so re-visiting a day within
//! the same tab skips the network; closing the tab clears everything.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::error::StorageError;

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::session_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(data).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}
