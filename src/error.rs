// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for query parsing.
//!
//! The phase arithmetic itself is total; the only failures come from
//! interpreting caller-supplied text.

use thiserror::Error;

/// Failure to interpret a query input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The date string is not an ISO calendar date (`YYYY-MM-DD`).
    #[error("invalid date {input:?}: expected YYYY-MM-DD ({source})")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The phase name does not match any of the eight phases exactly.
    #[error("unknown moon phase {0:?}")]
    UnknownPhase(String),
}

impl ParseError {
    pub(crate) fn invalid_date(input: &str, source: chrono::ParseError) -> Self {
        ParseError::InvalidDate {
            input: input.to_owned(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::error::Error as _;

    #[test]
    fn invalid_date_keeps_source() {
        let source = NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d").unwrap_err();
        let err = ParseError::invalid_date("2024-13-01", source);
        assert!(err.source().is_some());
        let msg = err.to_string();
        assert!(msg.contains("\"2024-13-01\""), "{msg}");
        assert!(msg.contains("YYYY-MM-DD"), "{msg}");
    }

    #[test]
    fn unknown_phase_message() {
        let err = ParseError::UnknownPhase("Blue Moon".into());
        assert_eq!(err.to_string(), "unknown moon phase \"Blue Moon\"");
        assert!(err.source().is_none());
    }
}
