//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and document loading (main entry point)
//! - [`header`] - Title, day navigation, preference toggles
//! - [`toolbar`] - Category chips and search box
//! - [`digest`] - Entry list, empty/error states, pager
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod digest;
pub mod header;
pub mod icons;
pub mod router;
pub mod toolbar;

pub use router::AppRouter;
