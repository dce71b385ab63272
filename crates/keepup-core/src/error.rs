//! Error types for parsing the digest contract and user preferences.

use thiserror::Error;

/// Errors raised while reading external documents or stored preferences.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Stored or requested locale tag is not supported.
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    /// Stored theme value is not supported.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Document is not valid JSON or does not match the expected shape.
    #[error("malformed digest document: {0}")]
    Json(#[from] serde_json::Error),
}
