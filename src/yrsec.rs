//! The year-second encoding: seconds elapsed since the start of a year.
//!
//! Hardware and schedule tables store timestamps compactly as a year plus an
//! integer count of seconds since that year began (0 to 31,535,999, or
//! 31,622,399 in a leap year). Unlike the epoch conversions, this encoding is
//! whole-second: the decoded second is an integer.
//!
//! ```
//! use radtime::{calendar_to_yrsec, yrsec_to_calendar};
//!
//! let (month, day, hour, minute, second) = yrsec_to_calendar(0, 2000);
//! assert_eq!((month, day, hour, minute, second), (1, 1, 0, 0, 0));
//!
//! // 60 whole days precede March 1 in a leap year
//! assert_eq!(calendar_to_yrsec(2000, 3, 1, 0, 0, 0), 60 * 86_400);
//! ```

use crate::calendar::{civil_to_mjd, mjd_to_civil};
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Decodes a year-second offset into (month, day, hour, minute, second).
///
/// The year resolves February's length. Precondition:
/// `0 <= seconds < days_in_year(year) * 86400`; offsets outside that range
/// decode into an adjacent year and the overflow is silently absorbed into
/// the month/day components.
pub fn yrsec_to_calendar(seconds: i64, year: i32) -> (i32, i32, i32, i32, i32) {
    let day_offset = seconds.div_euclid(SECONDS_PER_DAY);
    let rem = seconds.rem_euclid(SECONDS_PER_DAY);

    let (_, month, day) = mjd_to_civil(civil_to_mjd(year, 1, 1) + day_offset);

    let hour = (rem / SECONDS_PER_HOUR) as i32;
    let minute = ((rem % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as i32;
    let second = (rem % SECONDS_PER_MINUTE) as i32;

    (month, day, hour, minute, second)
}

/// Encodes calendar components as seconds since the start of `year`.
///
/// Inverse of [`yrsec_to_calendar`] for valid calendar input.
pub fn calendar_to_yrsec(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> i64 {
    let days = civil_to_mjd(year, month, day) - civil_to_mjd(year, 1, 1);
    days * SECONDS_PER_DAY
        + hour as i64 * SECONDS_PER_HOUR
        + minute as i64 * SECONDS_PER_MINUTE
        + second as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::days_in_year;

    #[test]
    fn test_year_start() {
        assert_eq!(yrsec_to_calendar(0, 2000), (1, 1, 0, 0, 0));
        assert_eq!(yrsec_to_calendar(0, 1999), (1, 1, 0, 0, 0));
    }

    #[test]
    fn test_year_end() {
        for year in [1999, 2000, 2023, 2024] {
            let last = days_in_year(year) as i64 * 86_400 - 1;
            assert_eq!(
                yrsec_to_calendar(last, year),
                (12, 31, 23, 59, 59),
                "year {}",
                year
            );
        }
    }

    #[test]
    fn test_leap_day_resolution() {
        // Day 59 (0-based) is Feb 29 in a leap year, Mar 1 otherwise
        let offset = 59 * 86_400;
        assert_eq!(yrsec_to_calendar(offset, 2000), (2, 29, 0, 0, 0));
        assert_eq!(yrsec_to_calendar(offset, 1999), (3, 1, 0, 0, 0));
    }

    #[test]
    fn test_time_of_day_split() {
        let offset = 31 * 86_400 + 13 * 3_600 + 45 * 60 + 7;
        assert_eq!(yrsec_to_calendar(offset, 2000), (2, 1, 13, 45, 7));
    }

    #[test]
    fn test_encode_decode_inverse() {
        let cases: &[(i32, i32, i32, i32, i32, i32)] = &[
            (2000, 1, 1, 0, 0, 0),
            (2000, 2, 29, 23, 59, 59),
            (1999, 12, 31, 23, 59, 59),
            (2024, 7, 4, 12, 0, 1),
        ];
        for &(y, mo, d, h, mi, s) in cases {
            let yrsec = calendar_to_yrsec(y, mo, d, h, mi, s);
            assert_eq!(yrsec_to_calendar(yrsec, y), (mo, d, h, mi, s));
        }
    }

    #[test]
    fn test_agrees_with_epoch_conversion() {
        // yrsec + epoch of Jan 1 must equal the epoch of the full date
        let yrsec = calendar_to_yrsec(2024, 2, 29, 6, 30, 15);
        let jan1 = crate::calendar_to_epoch(2024, 1, 1, 0, 0, 0.0);
        let full = crate::calendar_to_epoch(2024, 2, 29, 6, 30, 15.0);
        assert_eq!(jan1 + yrsec as f64, full);
    }
}
