// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase engine.
//!
//! Computes the Moon's age, named phase, display symbol and illuminated
//! fraction for calendar dates, and searches forward for the next
//! occurrence of a phase. The model is the classic mean-lunation one: a
//! reference new moon (2000-01-06 18:14 UTC) and a fixed synodic month of
//! 29.53058867 days.
//!
//! # Core types
//!
//! - [`PhaseEngine`] — stateless calculator bound to a [`LunarCycle`].
//! - [`PhaseResult`] — immutable result for one query date.
//! - [`MoonPhase`] — the eight named phases and their symbols.
//! - [`QueryDate`] — accepted query inputs (chrono values, ISO strings).
//! - [`Time<S>`] — instant on a [`TimeScale`] ([`JD`], [`MJD`], [`UnixTime`]).
//! - [`Almanac`] / [`PhaseSpan`] — daily listings and phase runs.
//!
//! # Example
//!
//! ```
//! use selene::{MoonPhase, PhaseEngine};
//!
//! let engine = PhaseEngine::default();
//! let today = engine.calculate_phase("2024-01-01").unwrap();
//! assert_eq!(today.phase, MoonPhase::WaningGibbous);
//!
//! match engine.next_occurrence("2024-01-01", "Full Moon").unwrap() {
//!     Some(full) => println!("next full moon: {}", full.date),
//!     None => println!("no full moon in the next 30 days"),
//! }
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize` for [`PhaseResult`] (flat record, two-decimal
//!   rounding), `Serialize`/`Deserialize` for [`MoonPhase`] and [`Time`].
//! - `cli` — builds the `selene` command-line tool.

mod almanac;
mod cycle;
mod date;
mod engine;
mod error;
pub(crate) mod instant;
mod phase;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use almanac::{Almanac, PhaseSpan};
pub use cycle::{LunarCycle, REFERENCE_NEW_MOON, SYNODIC_MONTH};
pub use date::{parse_date, QueryDate, ISO_DATE_FORMAT};
pub use engine::{PhaseEngine, PhaseResult, DEFAULT_HORIZON_DAYS};
pub use error::ParseError;
pub use instant::{Time, TimeScale};
pub use phase::{MoonPhase, PHASE_TABLE};
pub use scales::{UnixTime, JD, MJD};

/// Julian Date on the civil (UTC) axis.
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
pub type ModifiedJulianDate = Time<MJD>;

/// Phase for `date` under the standard [`LunarCycle`].
///
/// Shorthand for `PhaseEngine::default().calculate_phase(date)`.
pub fn calculate_phase<D: QueryDate>(date: D) -> Result<PhaseResult, ParseError> {
    PhaseEngine::default().calculate_phase(date)
}

/// Next occurrence of the phase named `target` within
/// [`DEFAULT_HORIZON_DAYS`] of `start`, under the standard [`LunarCycle`].
pub fn next_occurrence<D: QueryDate>(
    start: D,
    target: &str,
) -> Result<Option<PhaseResult>, ParseError> {
    PhaseEngine::default().next_occurrence(start, target)
}
