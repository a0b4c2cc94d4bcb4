//! # Execution Dates — Pinned `DD-MM-YYYY` Format
//!
//! Contract annexes state the date they were executed. The format string is
//! fixed (`%d-%m-%Y`, zero-padded) and never derived from the host locale,
//! so two renders on the same calendar day are byte-identical.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PascError;

/// Format string for execution dates printed on documents.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A calendar date printed as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExecutionDate(NaiveDate);

impl ExecutionDate {
    /// Today's date on the host's local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Build from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `PascError::InvalidDate` if the components do not form a
    /// real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, PascError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| PascError::InvalidDate(format!("{day:02}-{month:02}-{year:04}")))
    }

    /// Parse a `DD-MM-YYYY` string.
    pub fn parse(s: &str) -> Result<Self, PascError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| PascError::InvalidDate(s.to_string()))
    }
}

impl std::fmt::Display for ExecutionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for ExecutionDate {
    type Err = PascError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded_format() {
        let d = ExecutionDate::from_ymd(2026, 3, 5).unwrap();
        assert_eq!(d.to_string(), "05-03-2026");
    }

    #[test]
    fn test_parse_round_trip() {
        let d = ExecutionDate::parse("19-10-2026").unwrap();
        assert_eq!(d, ExecutionDate::from_ymd(2026, 10, 19).unwrap());
        assert_eq!(d.to_string(), "19-10-2026");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(ExecutionDate::parse("2026-10-19").is_err());
        assert!(ExecutionDate::parse("31-02-2026").is_err());
        assert!(ExecutionDate::parse("").is_err());
    }

    #[test]
    fn test_from_ymd_rejects_invalid() {
        match ExecutionDate::from_ymd(2026, 13, 1) {
            Err(PascError::InvalidDate(s)) => assert_eq!(s, "01-13-2026"),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_today_matches_format() {
        let s = ExecutionDate::today().to_string();
        assert_eq!(s.len(), 10);
        assert_eq!(&s[2..3], "-");
        assert_eq!(&s[5..6], "-");
    }

    #[test]
    fn test_ordering() {
        let a = ExecutionDate::from_ymd(2026, 1, 31).unwrap();
        let b = ExecutionDate::from_ymd(2026, 2, 1).unwrap();
        assert!(a < b);
    }
}
