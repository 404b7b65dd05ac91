// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-by-day phase listings.
//!
//! This module provides:
//! - [`Almanac`]: iterator over consecutive daily [`PhaseResult`]s
//! - [`PhaseSpan`]: a run of consecutive days sharing one phase, as a
//!   closed `[first, last]` date range

use crate::date::QueryDate;
use crate::engine::{PhaseEngine, PhaseResult};
use crate::error::ParseError;
use crate::phase::MoonPhase;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Iterator over daily phase results, one per day from a start instant.
///
/// Each step keeps the start's time of day. The iterator ends only if the
/// date runs past chrono's representable range.
#[derive(Debug, Clone)]
pub struct Almanac {
    engine: PhaseEngine,
    next: Option<NaiveDateTime>,
}

impl Almanac {
    pub(crate) fn new(engine: PhaseEngine, start: NaiveDateTime) -> Self {
        Self {
            engine,
            next: Some(start),
        }
    }
}

impl Iterator for Almanac {
    type Item = PhaseResult;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.checked_add_signed(Duration::days(1));
        Some(self.engine.phase_at(current))
    }
}

impl std::iter::FusedIterator for Almanac {}

/// Consecutive days in the same phase.
///
/// Both ends are inclusive: `first` and `last` are the first and last listed
/// days in `phase`, so a span ending on `NaiveDate::MAX` needs no day after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhaseSpan {
    pub phase: MoonPhase,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl PhaseSpan {
    /// Number of days in the span, counting both ends.
    pub fn days(&self) -> i64 {
        self.last.signed_duration_since(self.first).num_days() + 1
    }

    /// Whether `date` falls inside `[first, last]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

impl fmt::Display for PhaseSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} from {} to {}",
            self.phase.symbol(),
            self.phase,
            self.first,
            self.last
        )
    }
}

impl PhaseEngine {
    /// Daily results for `days` days starting at `start`.
    pub fn almanac<D: QueryDate>(&self, start: D, days: u32) -> Result<Vec<PhaseResult>, ParseError> {
        Ok(self.days_from(start.into_query()?).take(days as usize).collect())
    }

    /// Group `days` daily results from `start` into runs of the same phase.
    ///
    /// ```
    /// use selene::{MoonPhase, PhaseEngine};
    ///
    /// let spans = PhaseEngine::default().phase_spans("2024-01-01", 30).unwrap();
    /// let full = spans.iter().find(|s| s.phase == MoonPhase::FullMoon).unwrap();
    /// assert_eq!(full.first.to_string(), "2024-01-25");
    /// assert_eq!(full.last.to_string(), "2024-01-27");
    /// ```
    pub fn phase_spans<D: QueryDate>(&self, start: D, days: u32) -> Result<Vec<PhaseSpan>, ParseError> {
        let start = start.into_query()?;
        let mut spans: Vec<PhaseSpan> = Vec::new();
        for result in self.days_from(start).take(days as usize) {
            match spans.last_mut() {
                Some(span) if span.phase == result.phase => span.last = result.date,
                _ => spans.push(PhaseSpan {
                    phase: result.phase,
                    first: result.date,
                    last: result.date,
                }),
            }
        }
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn almanac_yields_consecutive_days() {
        let engine = PhaseEngine::default();
        let days = engine.almanac("2024-02-27", 4).unwrap();
        let dates: Vec<NaiveDate> = days.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2024, 2, 27), ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]
        );
        for result in &days {
            assert_eq!(*result, engine.phase_on(result.date));
        }
    }

    #[test]
    fn almanac_of_zero_days_is_empty() {
        let engine = PhaseEngine::default();
        assert!(engine.almanac("2024-01-01", 0).unwrap().is_empty());
        assert!(engine.phase_spans("2024-01-01", 0).unwrap().is_empty());
    }

    #[test]
    fn almanac_stops_at_end_of_calendar() {
        let engine = PhaseEngine::default();
        let last = NaiveDate::MAX.and_time(chrono::NaiveTime::MIN);
        let mut it = engine.days_from(last);
        assert_eq!(it.next().map(|r| r.date), Some(NaiveDate::MAX));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn spans_partition_the_listing() {
        let engine = PhaseEngine::default();
        let spans = engine.phase_spans("2024-01-01", 60).unwrap();

        assert_eq!(spans.first().map(|s| s.first), Some(ymd(2024, 1, 1)));
        assert_eq!(spans.last().map(|s| s.last), Some(ymd(2024, 2, 29)));
        assert_eq!(spans.iter().map(PhaseSpan::days).sum::<i64>(), 60);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].last.succ_opt(), Some(pair[1].first));
            assert_ne!(pair[0].phase, pair[1].phase);
            assert_eq!(pair[0].phase.next(), pair[1].phase);
        }
    }

    #[test]
    fn spans_agree_with_daily_results() {
        let engine = PhaseEngine::default();
        let spans = engine.phase_spans("2023-12-15", 45).unwrap();
        for result in engine.almanac("2023-12-15", 45).unwrap() {
            let span = spans.iter().find(|s| s.contains(result.date)).unwrap();
            assert_eq!(span.phase, result.phase, "{}", result.date);
        }
    }

    #[test]
    fn span_display() {
        let span = PhaseSpan {
            phase: MoonPhase::FullMoon,
            first: ymd(2024, 1, 25),
            last: ymd(2024, 1, 28),
        };
        assert_eq!(span.days(), 4);
        assert!(span.contains(ymd(2024, 1, 28)));
        assert!(!span.contains(ymd(2024, 1, 29)));
        assert_eq!(span.to_string(), "🌕 Full Moon from 2024-01-25 to 2024-01-28");
    }

    #[test]
    fn span_on_last_calendar_day_keeps_its_length() {
        let engine = PhaseEngine::default();
        let spans = engine.phase_spans(NaiveDate::MAX, 3).unwrap();
        assert_eq!(spans.len(), 1);
        let span = spans[0];
        assert_eq!((span.first, span.last), (NaiveDate::MAX, NaiveDate::MAX));
        assert_eq!(span.days(), 1);
        assert!(span.contains(NaiveDate::MAX));
    }

    #[test]
    fn malformed_start_is_an_error() {
        let engine = PhaseEngine::default();
        assert!(engine.almanac("2024/01/01", 3).is_err());
        assert!(engine.phase_spans("2024/01/01", 3).is_err());
    }
}
