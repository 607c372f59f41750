//! Core units, constants, and clock-window primitives shared across the
//! sailing calculator workspace.

use serde::{Deserialize, Serialize};

/// Unit system the boater enters values in.
///
/// Nautical values are nautical miles and knots; metric values are
/// kilometres and km/h and get converted before any planning arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Nautical,
    Metric,
}

impl UnitSystem {
    /// Label shown next to distances ("zeemijl" or "km").
    pub fn distance_label(self) -> &'static str {
        match self {
            UnitSystem::Nautical => "zeemijl",
            UnitSystem::Metric => "km",
        }
    }

    /// Label shown next to speeds ("knopen" or "km/u").
    pub fn speed_label(self) -> &'static str {
        match self {
            UnitSystem::Nautical => "knopen",
            UnitSystem::Metric => "km/u",
        }
    }
}

/// Conversion constants.
pub mod constants {
    /// Kilometres per nautical mile. The same factor converts km/h to knots.
    pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;
    /// Minutes per hour.
    pub const MINUTES_PER_HOUR: i64 = 60;
    /// Minutes per day, for midnight rollover arithmetic.
    pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::KM_PER_NAUTICAL_MILE;

    /// Convert kilometres to nautical miles.
    #[inline]
    pub fn km_to_nm(v: f64) -> f64 {
        v / KM_PER_NAUTICAL_MILE
    }

    /// Convert nautical miles to kilometres.
    #[inline]
    pub fn nm_to_km(v: f64) -> f64 {
        v * KM_PER_NAUTICAL_MILE
    }

    /// Convert km/h to knots.
    #[inline]
    pub fn kmh_to_knots(v: f64) -> f64 {
        v / KM_PER_NAUTICAL_MILE
    }

    /// Convert knots to km/h.
    #[inline]
    pub fn knots_to_kmh(v: f64) -> f64 {
        v * KM_PER_NAUTICAL_MILE
    }
}

/// Time-of-day window helpers shared by the planner and the sweep tooling.
///
/// Only the hour and minute of day matter; the date component of a trip is
/// irrelevant to the arithmetic.
pub mod time {
    use super::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
    use chrono::{NaiveTime, Timelike};

    /// Minute-of-day index of a clock time.
    #[inline]
    pub fn minute_of_day(t: NaiveTime) -> i64 {
        i64::from(t.hour()) * MINUTES_PER_HOUR + i64::from(t.minute())
    }

    /// Whole minutes in the effective window between departure and arrival.
    ///
    /// When the arrival is not strictly later than the departure the arrival
    /// is taken to be on the next day, so an arrival equal to the departure
    /// yields a full 24-hour window rather than an empty one.
    pub fn window_minutes(departure: NaiveTime, arrival: NaiveTime) -> i64 {
        let mut window = minute_of_day(arrival) - minute_of_day(departure);
        if window <= 0 {
            window += MINUTES_PER_DAY;
        }
        window
    }

    /// Effective window expressed in fractional hours. Always positive.
    pub fn window_hours(departure: NaiveTime, arrival: NaiveTime) -> f64 {
        window_minutes(departure, arrival) as f64 / MINUTES_PER_HOUR as f64
    }

    /// Shift a clock time by a number of minutes, wrapping past midnight.
    pub fn shift_by_minutes(t: NaiveTime, minutes: i64) -> NaiveTime {
        let total = (minute_of_day(t) + minutes).rem_euclid(MINUTES_PER_DAY);
        NaiveTime::from_hms_opt((total / MINUTES_PER_HOUR) as u32, (total % MINUTES_PER_HOUR) as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Shift a clock time by fractional hours, truncated to whole minutes,
    /// wrapping past midnight.
    pub fn shift_by_hours(t: NaiveTime, hours: f64) -> NaiveTime {
        shift_by_minutes(t, (hours * MINUTES_PER_HOUR as f64).trunc() as i64)
    }
}
