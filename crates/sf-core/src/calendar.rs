//! Simulation calendar and time conversions.
//!
//! # Design
//!
//! Stages are day-stepped: the plant and port simulators iterate calendar
//! dates, while trips and vessel events carry second-resolution timestamps.
//! Both use `chrono` naive types; the simulation has no time zone.
//!
//! Fractional hours (transit times, delays) convert to `chrono::Duration` at
//! millisecond resolution.  A delay rounded to two decimals of an hour is a
//! whole multiple of 36 s, so `eta + hours(delay)` is exact to the second.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{SfError, SfResult, SimRng};

/// Date cell format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp cell format.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Midnight at the start of `date`.
#[inline]
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Convert fractional hours to a `Duration` (millisecond resolution).
#[inline]
pub fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * 3_600_000.0).round() as i64)
}

/// Fractional hours from `earlier` to `later` (negative if reversed).
#[inline]
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 3_600_000.0
}

/// Seconds since the Unix epoch, as used by the prediction feature vectors.
#[inline]
pub fn epoch_secs(t: NaiveDateTime) -> i64 {
    t.and_utc().timestamp()
}

/// A uniformly random second-resolution instant within `date`.
pub fn random_time_in_day(date: NaiveDate, rng: &mut SimRng) -> NaiveDateTime {
    let h: i64 = rng.gen_range(0..24);
    let m: i64 = rng.gen_range(0..60);
    let s: i64 = rng.gen_range(0..60);
    day_start(date) + Duration::seconds(h * 3_600 + m * 60 + s)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> SfResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| SfError::Parse(format!("invalid date {s:?}: {e}")))
}

/// Parse a timestamp in [`DATETIME_FORMAT`], also accepting the ISO `T`
/// separator and fractional seconds written by other tools.
pub fn parse_datetime(s: &str) -> SfResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|e| SfError::Parse(format!("invalid timestamp {s:?}: {e}")))
}

// ── SimCalendar ───────────────────────────────────────────────────────────────

/// A contiguous run of simulated days starting at `start`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimCalendar {
    /// First simulated day.
    pub start: NaiveDate,
    /// Number of simulated days.
    pub days:  u32,
}

impl SimCalendar {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Calendar covering `first..=last`.  Empty if `last < first`.
    pub fn spanning(first: NaiveDate, last: NaiveDate) -> Self {
        let days = (last - first).num_days() + 1;
        Self { start: first, days: u32::try_from(days.max(0)).unwrap_or(0) }
    }

    /// The `day`-th simulated date (0-based).
    #[inline]
    pub fn date(&self, day: u32) -> NaiveDate {
        self.start + Duration::days(i64::from(day))
    }

    /// The final simulated date, or `None` for an empty calendar.
    pub fn last(&self) -> Option<NaiveDate> {
        self.days.checked_sub(1).map(|d| self.date(d))
    }

    /// Exclusive end date.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.date(self.days)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.days == 0
    }

    /// Iterator over every simulated date in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).map(|d| self.date(d))
    }
}

impl fmt::Display for SimCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} days", self.start.format(DATE_FORMAT), self.days)
    }
}

// ── serde adapter ─────────────────────────────────────────────────────────────

/// `#[serde(with = "sf_core::calendar::datetime_format")]` for timestamp cells.
#[cfg(feature = "serde")]
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(super::DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}
