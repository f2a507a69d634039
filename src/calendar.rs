//! Gregorian calendar arithmetic.
//!
//! Day-number conversions use the integer Fliegel-Van Flandern formulas,
//! expressed as Modified Julian Dates so the constants stay small. All
//! functions here are pure table/formula lookups with no state.

use crate::constants::{DAYS_PER_LEAP_YEAR, DAYS_PER_MONTH, DAYS_PER_YEAR, MJD_TO_JDN};
use crate::{TimeError, TimeResult};

/// Returns `true` if `year` is a leap year (Gregorian rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given year: 365, or 366 for leap years.
pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        DAYS_PER_LEAP_YEAR
    } else {
        DAYS_PER_YEAR
    }
}

/// Number of days in a month, leap-aware for February.
///
/// Errors on a month outside 1-12.
pub fn days_in_month(year: i32, month: i32) -> TimeResult<i32> {
    match month {
        2 => {
            if is_leap_year(year) {
                Ok(29)
            } else {
                Ok(28)
            }
        }
        1..=12 => Ok(DAYS_PER_MONTH[(month - 1) as usize]),
        _ => Err(TimeError::InvalidDate {
            year,
            month,
            day: 1,
            message: "month out of range".to_string(),
        }),
    }
}

/// Ordinal day within the year, 1-based (Jan 1 = 1, Dec 31 = 365 or 366).
///
/// Precondition: `month` and `day` form a valid date for `year`.
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    (civil_to_mjd(year, month, day) - civil_to_mjd(year, 1, 1)) as i32 + 1
}

/// The calendar day following the given one, rolling over months and years.
pub fn next_calendar_day(year: i32, month: i32, day: i32) -> TimeResult<(i32, i32, i32)> {
    let dim = days_in_month(year, month)?;
    if day < dim {
        Ok((year, month, day + 1))
    } else if month < 12 {
        Ok((year, month + 1, 1))
    } else {
        Ok((year + 1, 1, 1))
    }
}

/// Checks that (year, month, day) names a real Gregorian date.
pub fn validate_date(year: i32, month: i32, day: i32) -> TimeResult<()> {
    let dim = days_in_month(year, month)?;
    if day < 1 || day > dim {
        return Err(TimeError::InvalidDate {
            year,
            month,
            day,
            message: format!("day out of range 1-{}", dim),
        });
    }
    Ok(())
}

/// Converts a calendar date to its Modified Julian Date.
///
/// Integer formula valid over the proleptic Gregorian calendar; 1970-01-01
/// maps to MJD 40587. Months outside 1-12 are a caller precondition.
pub fn civil_to_mjd(year: i32, month: i32, day: i32) -> i64 {
    let my = (month - 14) / 12;
    let iypmy = (year + my) as i64;
    let month = month as i64;
    let my = my as i64;

    (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day as i64
        - 2_432_076
}

/// Converts a Modified Julian Date back to (year, month, day).
///
/// Inverse of [`civil_to_mjd`] for all dates this crate handles.
pub fn mjd_to_civil(mjd: i64) -> (i32, i32, i32) {
    let jdn = mjd + MJD_TO_JDN;

    let mut l = jdn + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4_000 * (l + 1)) / 1_461_001;
    l -= (1_461 * i) / 4 - 31;
    let k = (80 * l) / 2_447;
    let day = (l - (2_447 * k) / 80) as i32;
    let l = k / 11;
    let month = (k + 2 - 12 * l) as i32;
    let year = (100 * (n - 49) + i + l) as i32;

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(1999), 365);
    }

    #[test]
    fn test_days_in_month() {
        let non_leap: &[i32] = &[31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (m, &expected) in (1..=12).zip(non_leap) {
            assert_eq!(days_in_month(1999, m).unwrap(), expected, "month {}", m);
        }
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert!(days_in_month(2000, 0).is_err());
        assert!(days_in_month(2000, 13).is_err());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(1999, 1, 1), 1);
        assert_eq!(day_of_year(1999, 12, 31), 365);
        assert_eq!(day_of_year(2000, 12, 31), 366);
        assert_eq!(day_of_year(2000, 3, 1), 61); // leap year: 31 + 29 + 1
        assert_eq!(day_of_year(1999, 3, 1), 60);
    }

    #[test]
    fn test_next_calendar_day() {
        let cases: &[(i32, i32, i32, (i32, i32, i32))] = &[
            (2000, 2, 28, (2000, 2, 29)),
            (1999, 2, 28, (1999, 3, 1)),
            (2000, 4, 30, (2000, 5, 1)),
            (2000, 12, 31, (2001, 1, 1)),
            (2000, 1, 15, (2000, 1, 16)),
        ];
        for &(y, m, d, expected) in cases {
            assert_eq!(next_calendar_day(y, m, d).unwrap(), expected);
        }
        assert!(next_calendar_day(2000, 13, 1).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(2000, 2, 29).is_ok());
        assert!(validate_date(1900, 2, 29).is_err());
        assert!(validate_date(2000, 4, 31).is_err());
        assert!(validate_date(2000, 1, 0).is_err());
        assert!(validate_date(2000, 13, 1).is_err());
    }

    #[test]
    fn test_mjd_anchors() {
        assert_eq!(civil_to_mjd(1970, 1, 1), 40_587);
        assert_eq!(civil_to_mjd(1858, 11, 17), 0);
        assert_eq!(civil_to_mjd(2000, 1, 1), 51_544);
    }

    #[test]
    fn test_mjd_round_trip() {
        // Every day across the leap-century boundary and a leap year
        for mjd in civil_to_mjd(1999, 1, 1)..=civil_to_mjd(2001, 12, 31) {
            let (y, m, d) = mjd_to_civil(mjd);
            assert_eq!(civil_to_mjd(y, m, d), mjd, "date {}-{:02}-{:02}", y, m, d);
            assert!(validate_date(y, m, d).is_ok());
        }
        // 1900 is not a leap year: Feb 28 is followed by Mar 1
        let feb28 = civil_to_mjd(1900, 2, 28);
        assert_eq!(mjd_to_civil(feb28 + 1), (1900, 3, 1));
    }
}
