//! Color theme preference.

use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and of the stored preference.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn parse(tag: &str) -> Result<Self, DigestError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DigestError::UnknownTheme(tag.to_string())),
        }
    }

    /// Theme implied by the system `prefers-color-scheme` setting.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Stored preference wins; otherwise follow the system.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(|tag| Self::parse(tag).ok())
            .unwrap_or_else(|| Self::from_system(prefers_dark))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Theme {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_tag() {
        assert_eq!(Theme::parse("dark").unwrap(), Theme::Dark);
        assert_eq!(Theme::parse(" Light ").unwrap(), Theme::Light);
        assert!(Theme::parse("sepia").is_err());
        assert_eq!(Theme::Dark.tag(), "dark");
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("garbage"), false), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }
}
