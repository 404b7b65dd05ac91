// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The phase engine.
//!
//! [`PhaseEngine`] turns a query date into a [`PhaseResult`]:
//!
//! ```text
//! date → Time<UnixTime> → days since reference new moon
//!      → lunar age (floor-mod synodic month) → phase, percent, illumination
//! ```
//!
//! and scans forward day by day for the next occurrence of a named phase.
//! The engine holds nothing but its [`LunarCycle`]; every call is a pure
//! function of the cycle and the query.

use crate::almanac::Almanac;
use crate::cycle::LunarCycle;
use crate::date::{QueryDate, ISO_DATE_FORMAT};
use crate::error::ParseError;
use crate::instant::{Time, TimeScale};
use crate::phase::MoonPhase;
use crate::scales::UnixTime;
use chrono::{NaiveDate, NaiveDateTime};
use qtty::Days;
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Days scanned by [`PhaseEngine::next_occurrence`]: slightly more than one
/// lunation, so every phase occurs at least once.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Phase of the Moon on one calendar date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseResult {
    /// The queried calendar date.
    pub date: NaiveDate,
    /// Named phase the lunar age falls in.
    pub phase: MoonPhase,
    /// Days into the current lunation, in `[0, synodic_month)`.
    pub lunar_age: Days,
    /// `lunar_age / synodic_month * 100`, in `[0, 100)`.
    pub phase_percent: f64,
    /// Lit fraction of the disk as a percentage, in `[0, 100]`.
    pub illumination: f64,
}

impl PhaseResult {
    /// Display name of the phase.
    ///
    /// ```
    /// let result = selene::calculate_phase("2024-01-25").unwrap();
    /// assert_eq!(result.phase_name(), "Full Moon");
    /// assert_eq!(result.symbol(), "🌕");
    /// ```
    #[inline]
    pub fn phase_name(&self) -> &'static str {
        self.phase.name()
    }

    /// Moon emoji for the phase.
    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.phase.symbol()
    }
}

#[cfg(any(feature = "serde", test))]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for PhaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (age {:.2} d, {:.2}% of cycle, {:.2}% illuminated)",
            self.date.format(ISO_DATE_FORMAT),
            self.symbol(),
            self.phase_name(),
            self.lunar_age.value(),
            self.phase_percent,
            self.illumination,
        )
    }
}

// Flat record with numeric fields rounded to two decimals.
#[cfg(feature = "serde")]
impl Serialize for PhaseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("PhaseResult", 6)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("phase_name", self.phase_name())?;
        s.serialize_field("symbol", self.symbol())?;
        s.serialize_field("lunar_age", &round2(self.lunar_age.value()))?;
        s.serialize_field("phase_percent", &round2(self.phase_percent))?;
        s.serialize_field("illumination", &round2(self.illumination))?;
        s.end()
    }
}

/// Stateless lunar phase calculator bound to a [`LunarCycle`].
///
/// # Examples
///
/// ```
/// use selene::{MoonPhase, PhaseEngine};
///
/// let engine = PhaseEngine::default();
/// let result = engine.calculate_phase("2024-01-25").unwrap();
/// assert_eq!(result.phase, MoonPhase::FullMoon);
///
/// let next = engine.next_occurrence("2024-01-01", "Full Moon").unwrap();
/// assert_eq!(next.map(|r| r.date.to_string()), Some("2024-01-25".to_string()));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PhaseEngine {
    cycle: LunarCycle,
}

impl PhaseEngine {
    /// Engine evaluating phases against `cycle`.
    pub const fn new(cycle: LunarCycle) -> Self {
        Self { cycle }
    }

    /// The reference epoch and synodic month in use.
    #[inline]
    pub const fn cycle(&self) -> &LunarCycle {
        &self.cycle
    }

    fn evaluate(&self, date: NaiveDate, instant: Time<UnixTime>) -> PhaseResult {
        let lunar_age = self.cycle.lunar_age(instant);
        let phase = MoonPhase::from_age(lunar_age);
        trace!(%date, lunar_age = lunar_age.value(), phase = phase.name(), "evaluated lunar phase");
        PhaseResult {
            date,
            phase,
            lunar_age,
            phase_percent: self.cycle.phase_percent(lunar_age),
            illumination: self.cycle.illumination(lunar_age),
        }
    }

    /// Phase at a naive (UTC wall-clock) date-time.
    pub fn phase_at(&self, datetime: NaiveDateTime) -> PhaseResult {
        self.evaluate(datetime.date(), Time::from_civil(datetime))
    }

    /// Phase at midnight of `date`.
    pub fn phase_on(&self, date: NaiveDate) -> PhaseResult {
        self.phase_at(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Phase at an instant on any time scale.
    ///
    /// Returns `None` if the instant has no civil date chrono can represent.
    pub fn phase_at_time<S: TimeScale>(&self, instant: Time<S>) -> Option<PhaseResult> {
        let date = instant.to_civil()?.date();
        Some(self.evaluate(date, instant.to::<UnixTime>()))
    }

    /// Phase for a calendar date, a date-time, or an ISO `YYYY-MM-DD` string.
    ///
    /// Dates without a time of day are evaluated at midnight.
    pub fn calculate_phase<D: QueryDate>(&self, date: D) -> Result<PhaseResult, ParseError> {
        Ok(self.phase_at(date.into_query()?))
    }

    /// First date, scanning forward from `start` for
    /// [`DEFAULT_HORIZON_DAYS`] days, whose phase is named `target`.
    pub fn next_occurrence<D: QueryDate>(
        &self,
        start: D,
        target: &str,
    ) -> Result<Option<PhaseResult>, ParseError> {
        self.next_occurrence_within(start, target, DEFAULT_HORIZON_DAYS)
    }

    /// Evaluate `start + k` days for `k` in `0..horizon_days` and return the
    /// first result whose phase name equals `target` exactly.
    ///
    /// `Ok(None)` means no match inside the window, which includes names
    /// that are not phases at all. Only a malformed `start` is an error.
    pub fn next_occurrence_within<D: QueryDate>(
        &self,
        start: D,
        target: &str,
        horizon_days: u32,
    ) -> Result<Option<PhaseResult>, ParseError> {
        let start = start.into_query()?;
        match MoonPhase::from_name(target) {
            Some(phase) => Ok(self.next_phase(start, phase, horizon_days)),
            None => {
                debug!(phase_name = target, "not a phase name; nothing to search for");
                Ok(None)
            }
        }
    }

    /// Typed form of [`next_occurrence_within`](Self::next_occurrence_within).
    pub fn next_phase(
        &self,
        start: NaiveDateTime,
        target: MoonPhase,
        horizon_days: u32,
    ) -> Option<PhaseResult> {
        debug!(%start, phase = target.name(), horizon_days, "searching for next phase");
        let found = self
            .days_from(start)
            .take(horizon_days as usize)
            .find(|result| result.phase == target);
        match &found {
            Some(result) => debug!(date = %result.date, "phase found"),
            None => debug!("phase not found within horizon"),
        }
        found
    }

    /// Unbounded day-by-day iterator starting at `start`.
    pub fn days_from(&self, start: NaiveDateTime) -> Almanac {
        Almanac::new(*self, start)
    }
}
