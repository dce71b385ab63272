//! Link safety for source citations.
//!
//! Citation URLs come from scraped third-party content, so only absolute
//! `http(s)` links with a host are ever turned into anchors.

use std::fmt;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is safe to use as a link target
    Valid(String),
    /// URL must be rendered as plain text
    Invalid(UrlValidationError),
}

impl UrlValidation {
    /// The safe URL, if any.
    pub fn into_valid(self) -> Option<String> {
        match self {
            Self::Valid(url) => Some(url),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host
    NoHost,
    /// URL contains whitespace or control characters
    InvalidCharacters,
}

impl fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::InvalidCharacters => write!(f, "URL contains whitespace or control characters"),
        }
    }
}

/// Validate a citation URL.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL has no embedded whitespace or control characters
/// 3. URL starts with http:// or https:// (case-insensitive)
/// 4. URL has a non-empty host
pub fn validate_link_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return UrlValidation::Invalid(UrlValidationError::InvalidCharacters);
    }

    let Some(rest) = strip_scheme(url) else {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    };

    if extract_host(rest).is_none() {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    }

    UrlValidation::Valid(url.to_string())
}

fn strip_scheme(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("http") {
        Some(rest)
    } else {
        None
    }
}

/// Host part of a scheme-less URL (userinfo and port removed).
fn extract_host(rest: &str) -> Option<&str> {
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() { None } else { Some(host) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_link_url("https://news.ycombinator.com/item?id=1"),
            UrlValidation::Valid("https://news.ycombinator.com/item?id=1".to_string())
        );
        assert!(matches!(
            validate_link_url("  HTTP://dev.to/post  "),
            UrlValidation::Valid(u) if u == "HTTP://dev.to/post"
        ));
        assert!(matches!(
            validate_link_url("https://example.com:8443"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(
            validate_link_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_link_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_link_url("ftp://example.com"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_link_url("//example.com"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_link_url("https:///path"),
            UrlValidation::Invalid(UrlValidationError::NoHost)
        );
        assert_eq!(
            validate_link_url("https://exa mple.com"),
            UrlValidation::Invalid(UrlValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(extract_host("github.com/user"), Some("github.com"));
        assert_eq!(extract_host("user:pw@host.io:80/x"), Some("host.io"));
        assert_eq!(extract_host("host.io?q=1"), Some("host.io"));
        assert_eq!(extract_host("/path"), None);
    }
}
