// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The eight named lunar phases.
//!
//! Classification is a scan over [`PHASE_TABLE`], an ordered list of
//! `(upper_bound, phase)` pairs in days of lunar age. The first seven bounds
//! sit at `(k + 0.5) / 8` of the synodic month; the last row has no bound
//! and takes the tail of the cycle.

use crate::error::ParseError;
use qtty::Days;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the eight conventional phases of the Moon, in cycle order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Upper lunar-age bounds, in days. A `None` bound runs to the end of the
/// cycle.
#[rustfmt::skip]
pub const PHASE_TABLE: [(Option<Days>, MoonPhase); 8] = [
    (Some(Days::new(1.84566)),  MoonPhase::NewMoon),
    (Some(Days::new(5.53699)),  MoonPhase::WaxingCrescent),
    (Some(Days::new(9.22831)),  MoonPhase::FirstQuarter),
    (Some(Days::new(12.91963)), MoonPhase::WaxingGibbous),
    (Some(Days::new(16.61096)), MoonPhase::FullMoon),
    (Some(Days::new(20.30228)), MoonPhase::WaningGibbous),
    (Some(Days::new(23.99361)), MoonPhase::LastQuarter),
    (None,                      MoonPhase::WaningCrescent),
];

impl MoonPhase {
    /// All phases in cycle order, starting at New Moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Classify a lunar age (days since the last new moon).
    ///
    /// ```
    /// use qtty::Days;
    /// use selene::MoonPhase;
    ///
    /// assert_eq!(MoonPhase::from_age(Days::new(0.0)), MoonPhase::NewMoon);
    /// assert_eq!(MoonPhase::from_age(Days::new(14.8)), MoonPhase::FullMoon);
    /// assert_eq!(MoonPhase::from_age(Days::new(29.0)), MoonPhase::WaningCrescent);
    /// ```
    pub fn from_age(lunar_age: Days) -> Self {
        PHASE_TABLE
            .iter()
            .find(|(bound, _)| bound.map_or(true, |upper| lunar_age < upper))
            .map_or(MoonPhase::WaningCrescent, |&(_, phase)| phase)
    }

    /// Display name, e.g. `"Waxing Gibbous"`.
    pub const fn name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Display glyph (northern-hemisphere orientation).
    pub const fn symbol(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    /// Look a phase up by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.name() == name)
    }

    /// The phase that follows this one in the cycle.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoonPhase {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownPhase(s.to_owned()))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for MoonPhase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MoonPhase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PhaseVisitor;

        impl serde::de::Visitor<'_> for PhaseVisitor {
            type Value = MoonPhase;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a moon phase name such as \"Full Moon\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<MoonPhase, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PhaseVisitor)
    }
}
