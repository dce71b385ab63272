//! Calendar date keys (`YYYY-MM-DD`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::DigestError;

/// A validated calendar date naming one day's digest document.
///
/// Ordering is chronological, so sorting a list of dates in reverse gives
/// the newest-first order the reader presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigestDate {
    year: u16,
    month: u8,
    day: u8,
}

impl DigestDate {
    /// Build a date from its parts, rejecting impossible days.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DigestError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(DigestError::InvalidDate(format!(
                "{:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, DigestError> {
        let invalid = || DigestError::InvalidDate(s.to_string());
        let bytes = s.as_bytes();

        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        let digits = |range: std::ops::Range<usize>| -> Option<u16> {
            let part = &s[range];
            if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };

        let year = digits(0..4).ok_or_else(invalid)?;
        let month = digits(5..7).ok_or_else(invalid)?;
        let day = digits(8..10).ok_or_else(invalid)?;

        Self::new(year, month as u8, day as u8).map_err(|_| invalid())
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for DigestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DigestDate {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DigestDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DigestDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw.trim()).map_err(de::Error::custom)
    }
}
