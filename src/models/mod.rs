//! Data models and types for the application.
//!
//! - [`Route`] - Hash-based navigation between days
//! - [`LoadState`] - Progress of a fetched document
//! - [`Listing`] - What the entry area renders

mod listing;
mod load;
mod route;

pub use listing::Listing;
pub use load::LoadState;
pub use route::Route;
