// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`. Arithmetic,
//! civil-date conversion, serialisation and display are implemented once,
//! generically.
//!
//! Civil conversions treat `chrono::NaiveDateTime` as UTC wall-clock time
//! and round to the nearest millisecond, so a midnight instant survives a
//! round trip through the `f64` day count without slipping to 23:59:59.999
//! of the previous day.

use chrono::{DateTime, NaiveDateTime, Utc};
use qtty::Days;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day-counting time scales.
///
/// A scale defines a human-readable **label** and a pair of conversions
/// between its native quantity (in [`Days`]) and an absolute **Julian Day**.
/// For the epoch counters in [`scales`](crate::scales) these are constant
/// offsets the compiler folds away.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// `Time<S>` is `Copy` and layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Convert this instant to another time scale, routing through JD.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    // ── civil helpers ─────────────────────────────────────────────────

    /// Build an instant from a naive (UTC wall-clock) date-time.
    pub fn from_civil(datetime: NaiveDateTime) -> Self {
        use super::scales::UnixTime;
        let millis = datetime.and_utc().timestamp_millis();
        Time::<UnixTime>::new(millis as f64 / MILLIS_PER_DAY).to::<S>()
    }

    /// Convert to a naive (UTC wall-clock) date-time, rounded to the
    /// nearest millisecond.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_civil(&self) -> Option<NaiveDateTime> {
        use super::scales::UnixTime;
        let unix_days = self.to::<UnixTime>().value();
        if !unix_days.is_finite() {
            return None;
        }
        let millis = (unix_days * MILLIS_PER_DAY).round() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{UnixTime, JD, MJD};
    use super::*;
    use chrono::NaiveDate;

    fn civil(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn test_j2000_noon_from_civil() {
        let jd = Time::<JD>::from_civil(civil(2000, 1, 1, 12, 0));
        assert!((jd.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_civil_roundtrip_keeps_midnight() {
        let midnight = civil(2024, 1, 25, 0, 0);
        for t in [
            Time::<JD>::from_civil(midnight).to_civil(),
            Time::<MJD>::from_civil(midnight).to_civil(),
            Time::<UnixTime>::from_civil(midnight).to_civil(),
        ] {
            assert_eq!(t, Some(midnight));
        }
    }

    #[test]
    fn test_civil_before_unix_epoch() {
        let dt = civil(1969, 7, 20, 20, 17);
        let unix = Time::<UnixTime>::from_civil(dt);
        assert!(unix.value() < 0.0);
        assert_eq!(unix.to_civil(), Some(dt));
    }

    #[test]
    fn test_to_civil_out_of_range() {
        assert_eq!(Time::<UnixTime>::new(f64::NAN).to_civil(), None);
        assert_eq!(Time::<JD>::new(1e300).to_civil(), None);
    }

    #[test]
    fn test_difference_of_civil_instants() {
        let epoch = Time::<UnixTime>::from_civil(civil(2000, 1, 6, 18, 14));
        let midnight = Time::<UnixTime>::from_civil(civil(2000, 1, 6, 0, 0));
        let span = midnight - epoch;
        let expected = -(18.0 * 60.0 + 14.0) / 1440.0;
        assert!((span.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_add_sub_days() {
        let jd = Time::<JD>::new(2_451_545.0) + Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        assert_eq!((jd - Days::new(0.5)).quantity(), Days::new(2_451_545.5));
    }

    #[test]
    fn test_mjd_comparison() {
        let mjd1 = Time::<MJD>::new(59_000.0);
        let mjd2 = Time::<MJD>::new(59_001.0);
        assert!(mjd1 < mjd2);
        assert_eq!((mjd2 - mjd1).value(), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_day_count() {
        let mjd = Time::<MJD>::new(51_549.759_722);
        let json = serde_json::to_string(&mjd).unwrap();
        assert_eq!(json, "51549.759722");
        let back: Time<MJD> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mjd);
    }

    #[test]
    fn test_display_labels() {
        assert!(format!("{}", Time::<JD>::new(2_451_545.0)).starts_with("JD"));
        assert!(format!("{}", Time::<MJD>::new(51_544.5)).starts_with("MJD"));
    }
}
