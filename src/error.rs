//! Error types for the browser-facing layer.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage/sessionStorage operations

use std::fmt;

use keepup_core::DigestDate;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// The index lists a day whose document is missing
    NotPublished(DigestDate),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// Response is not a valid digest document
    ParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::NotPublished(date) => write!(f, "No digest document for {}", date),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::ParseError(msg) => write!(f, "{}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Browser storage errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Storage not available (private mode, disabled, no window).
    Unavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota, permissions).
    WriteFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage not available"),
            Self::SerializationFailed => write!(f, "failed to serialize value"),
            Self::WriteFailed => write!(f, "failed to write to storage"),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let date = DigestDate::parse("2026-10-17").unwrap();
        assert_eq!(FetchError::NotPublished(date).to_string(), "No digest document for 2026-10-17");
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::HttpError(500).to_string(), "HTTP error: 500");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}
