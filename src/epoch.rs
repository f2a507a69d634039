//! Conversions between epoch instants and broken-down calendar time.
//!
//! An epoch instant is a real-valued count of seconds since
//! 1970-01-01 00:00:00 UTC. Record headers carry the same moment as six
//! calendar components, with fractional seconds folded into `second`.
//!
//! # Algorithm
//!
//! The instant is split into whole days and a sub-day remainder with floored
//! division, so pre-1970 instants decompose correctly. The day count is
//! resolved to (year, month, day) through the Modified Julian Date formulas
//! in [`crate::calendar`]; the remainder splits into hour, minute, and
//! fractional second by plain division. No year-walking loops are involved,
//! so the cost is independent of the distance from the epoch.
//!
//! # Round-trip law
//!
//! For every instant representable without precision loss,
//! `calendar_to_epoch` applied to the output of `epoch_to_calendar` returns
//! the original value. An exact midnight always yields `second == 0.0`;
//! fractional seconds never surface as 60.
//!
//! # Usage
//!
//! ```
//! use radtime::CalendarTime;
//!
//! let t = CalendarTime::from_epoch(946_684_800.0);
//! assert_eq!((t.year, t.month, t.day), (2000, 1, 1));
//! assert_eq!(t.to_epoch(), 946_684_800.0);
//! assert_eq!(t.to_string(), "2000-01-01T00:00:00.000");
//! ```

use crate::calendar::{civil_to_mjd, mjd_to_civil, validate_date};
use crate::constants::{
    SECONDS_PER_DAY_F64, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, UNIX_EPOCH_MJD,
};
use crate::parsing::parse_iso8601;
use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

/// Broken-down calendar time: year, month, day, hour, minute, and a
/// fractional second.
///
/// A plain value type with no lifecycle; construct it directly when the
/// components are known valid, or through [`CalendarTime::new`] to have the
/// ranges checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTime {
    pub year: i32,
    /// 1-12.
    pub month: i32,
    /// 1-31, bounded by month and leap year.
    pub day: i32,
    /// 0-23.
    pub hour: i32,
    /// 0-59.
    pub minute: i32,
    /// Fractional seconds in [0, 60).
    pub second: f64,
}

impl CalendarTime {
    /// Checked constructor. Rejects impossible dates (February 30, month 13)
    /// and out-of-range time components.
    ///
    /// The raw conversion functions skip this validation by design; this is
    /// the entry point for untrusted input.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> TimeResult<Self> {
        validate_date(year, month, day)?;
        if !(0..24).contains(&hour) {
            return Err(TimeError::InvalidTime(format!(
                "hour {} out of range 0-23",
                hour
            )));
        }
        if !(0..60).contains(&minute) {
            return Err(TimeError::InvalidTime(format!(
                "minute {} out of range 0-59",
                minute
            )));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime(format!(
                "second {} out of range [0, 60)",
                second
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Decomposes an epoch instant into calendar components.
    pub fn from_epoch(instant: f64) -> Self {
        epoch_to_calendar(instant)
    }

    /// Re-encodes the calendar components as an epoch instant.
    pub fn to_epoch(&self) -> f64 {
        calendar_to_epoch(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// The current moment from the system clock.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_epoch(
            duration.as_secs() as f64
                + duration.subsec_nanos() as f64 / crate::constants::NANOSECONDS_PER_SECOND_F64,
        )
    }
}

/// Converts an epoch instant (fractional seconds since 1970-01-01 00:00:00
/// UTC) to calendar components.
///
/// Total over all finite instants, including negative (pre-1970) ones.
pub fn epoch_to_calendar(instant: f64) -> CalendarTime {
    let days = (instant / SECONDS_PER_DAY_F64).floor();
    let mut remainder = instant - days * SECONDS_PER_DAY_F64;
    let mut mjd = days as i64 + UNIX_EPOCH_MJD;

    // Floored division keeps the remainder in [0, 86400), but rounding of
    // instants just below a day boundary can push it to exactly 86400.
    if remainder >= SECONDS_PER_DAY_F64 {
        remainder -= SECONDS_PER_DAY_F64;
        mjd += 1;
    }
    if remainder < 0.0 {
        remainder = 0.0;
    }

    let (year, month, day) = mjd_to_civil(mjd);

    let hour = (remainder / SECONDS_PER_HOUR as f64) as i32;
    remainder -= (hour as i64 * SECONDS_PER_HOUR) as f64;
    let minute = (remainder / SECONDS_PER_MINUTE as f64) as i32;
    let second = remainder - (minute as i64 * SECONDS_PER_MINUTE) as f64;

    CalendarTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

/// Converts calendar components to an epoch instant.
///
/// Precondition: the components form a valid calendar time (month 1-12, day
/// valid for the month and year, hour 0-23, minute 0-59, second >= 0). Output
/// for out-of-range input is unspecified; use [`CalendarTime::new`] first if
/// the input is untrusted.
pub fn calendar_to_epoch(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> f64 {
    let days = civil_to_mjd(year, month, day) - UNIX_EPOCH_MJD;
    let whole_seconds = days * crate::constants::SECONDS_PER_DAY
        + hour as i64 * SECONDS_PER_HOUR
        + minute as i64 * SECONDS_PER_MINUTE;
    whole_seconds as f64 + second
}

/// Formats as ISO 8601 with millisecond precision
/// (`YYYY-MM-DDTHH:MM:SS.sss`).
impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses ISO 8601 formatted strings.
impl FromStr for CalendarTime {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        parse_iso8601(s)
    }
}
