// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar cycle parameters.
//!
//! A [`LunarCycle`] pins the phase model to a known new moon (the reference
//! epoch) and a mean synodic month. It is an immutable value bound into a
//! [`PhaseEngine`](crate::PhaseEngine) at construction.

use crate::instant::Time;
use crate::scales::UnixTime;
use chrono::NaiveDateTime;
use qtty::Days;
use std::f64::consts::TAU;

/// Mean synodic month: average time between successive new moons.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_67);

/// Reference new moon, 2000-01-06 18:14 UTC, as days since the Unix epoch.
///
/// 2000-01-06 is Unix day 10 962; 18:14 is 1 094 minutes into it.
pub const REFERENCE_NEW_MOON: Time<UnixTime> = Time::new(10_962.0 + 1_094.0 / 1_440.0);

/// Reference epoch and cycle length of the phase model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LunarCycle {
    reference_epoch: Time<UnixTime>,
    synodic_month: Days,
}

impl Default for LunarCycle {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LunarCycle {
    /// New moon of 2000-01-06 18:14 UTC with a 29.53058867-day month.
    pub const STANDARD: Self = Self {
        reference_epoch: REFERENCE_NEW_MOON,
        synodic_month: SYNODIC_MONTH,
    };

    /// Build a cycle from a known new moon and a cycle length.
    ///
    /// Returns `None` unless `synodic_month` is finite and strictly positive.
    /// Phase boundaries are fixed day counts and are not rescaled, so
    /// lengths far from the mean synodic month skew the eight-way split.
    pub fn new(reference_new_moon: NaiveDateTime, synodic_month: Days) -> Option<Self> {
        let length = synodic_month.value();
        if !length.is_finite() || length <= 0.0 {
            return None;
        }
        Some(Self {
            reference_epoch: Time::from_civil(reference_new_moon),
            synodic_month,
        })
    }

    /// The reference new moon.
    #[inline]
    pub const fn reference_epoch(&self) -> Time<UnixTime> {
        self.reference_epoch
    }

    /// Length of one lunation.
    #[inline]
    pub const fn synodic_month(&self) -> Days {
        self.synodic_month
    }

    /// Signed days elapsed from the reference new moon to `instant`.
    #[inline]
    pub fn days_since_epoch(&self, instant: Time<UnixTime>) -> Days {
        instant - self.reference_epoch
    }

    /// Days into the current lunation, always in `[0, synodic_month)`.
    ///
    /// Uses floor-modulo, so instants before the reference epoch land in
    /// range too.
    pub fn lunar_age(&self, instant: Time<UnixTime>) -> Days {
        let month = self.synodic_month.value();
        let age = self.days_since_epoch(instant).value().rem_euclid(month);
        // a tiny negative dividend can round up to exactly `month`
        if age >= month {
            Days::new(0.0)
        } else {
            Days::new(age)
        }
    }

    /// Fraction of the lunation elapsed at `lunar_age`, as a percentage.
    #[inline]
    pub fn phase_percent(&self, lunar_age: Days) -> f64 {
        lunar_age.value() / self.synodic_month.value() * 100.0
    }

    /// Illuminated percentage of the disk at `lunar_age`.
    ///
    /// `50 · (1 − cos(2π · age / month))`: 0 at new moon, 100 half a
    /// lunation later.
    pub fn illumination(&self, lunar_age: Days) -> f64 {
        let angle = TAU * lunar_age.value() / self.synodic_month.value();
        (50.0 * (1.0 - angle.cos())).clamp(0.0, 100.0)
    }
}
