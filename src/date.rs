// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Query-date adapters.
//!
//! [`QueryDate`] lets the engine accept structured chrono values and ISO
//! `YYYY-MM-DD` strings through a single entry point. Dates without a time
//! of day are taken at midnight; zoned values are read as UTC wall-clock
//! time.

use crate::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// `strftime` pattern for query strings.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// ```
/// use chrono::NaiveDate;
///
/// let d = selene::parse_date("2024-01-25").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
/// assert!(selene::parse_date("25/01/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .map_err(|source| ParseError::invalid_date(input, source))
}

/// A value that can be turned into the instant a phase query is evaluated at.
pub trait QueryDate {
    /// Resolve to a naive (UTC wall-clock) date-time.
    fn into_query(self) -> Result<NaiveDateTime, ParseError>;
}

impl QueryDate for NaiveDateTime {
    #[inline]
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        Ok(self)
    }
}

impl QueryDate for NaiveDate {
    #[inline]
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl QueryDate for DateTime<Utc> {
    #[inline]
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        Ok(self.naive_utc())
    }
}

impl QueryDate for &str {
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        parse_date(self)?.into_query()
    }
}

impl QueryDate for String {
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        self.as_str().into_query()
    }
}

impl QueryDate for &String {
    fn into_query(self) -> Result<NaiveDateTime, ParseError> {
        self.as_str().into_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn strings_resolve_to_midnight() {
        let q = "1999-01-01".into_query().unwrap();
        assert_eq!(q, ymd(1999, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(String::from("1999-01-01").into_query().unwrap(), q);
        assert_eq!((&String::from("1999-01-01")).into_query().unwrap(), q);
    }

    #[test]
    fn dates_resolve_to_midnight() {
        let q = ymd(2024, 2, 29).into_query().unwrap();
        assert_eq!(q.date(), ymd(2024, 2, 29));
        assert_eq!(q.time(), NaiveTime::MIN);
    }

    #[test]
    fn datetimes_keep_time_of_day() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        let q = dt.into_query().unwrap();
        assert_eq!(q, dt.naive_utc());
        assert_eq!(q.into_query().unwrap(), q);
    }

    #[test]
    fn malformed_strings_fail() {
        for bad in ["", "2024-1", "2024-02-30", "2024-13-01", "01/02/2024", "yesterday"] {
            match bad.into_query() {
                Err(ParseError::InvalidDate { input, .. }) => assert_eq!(input, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }
}
