// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values on
//! it relate to the canonical **Julian Day** axis. All scales here are civil
//! (naive UTC) epoch counters: there is no ΔT or leap-second handling, the
//! lunar phase model is far coarser than either.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00 | 2 440 587.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

/// Days elapsed since the Unix epoch, 1970-01-01T00:00 UTC.
///
/// This is the engine's working axis: values near the present are small
/// (~10⁴), so day differences keep sub-microsecond resolution in an `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix days";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

macro_rules! impl_time_conversions {
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
    ($single:ty $(,)?) => {};
}

impl_time_conversions!(JD, MJD, UnixTime);

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn unix_zero_is_1970_midnight() {
        let unix_zero = Time::<UnixTime>::new(0.0);
        let jd: Time<JD> = unix_zero.into();
        assert!((jd.quantity() - Days::new(2_440_587.5)).abs() < Days::new(1e-12));
    }

    #[test]
    fn mjd_unix_from_into() {
        // 1970-01-01 is MJD 40587.
        let mjd = Time::<MJD>::new(40_587.0);
        let unix: Time<UnixTime> = mjd.into();
        assert!(unix.quantity().abs() < Days::new(1e-9));
        let back: Time<MJD> = unix.into();
        assert!((back.quantity() - mjd.quantity()).abs() < Days::new(1e-9));
    }
}
