//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`dom`] - Window, storage, focus and hash helpers
//! - [`fetch_index`], [`fetch_day`] - Document loading with timeout
//! - [`cache`] - Per-tab sessionStorage cache for day documents
//! - [`prefs`] - Persisted language and theme preferences

pub mod cache;
pub mod dom;
mod fetch;
pub mod prefs;

pub use fetch::{fetch_day, fetch_index};
