//! Epoch and calendar time conversions for radar data records.
//!
//! Radar records stamp each measurement twice: as a continuous epoch value
//! (fractional seconds since 1970-01-01 00:00:00 UTC) and as broken-down
//! calendar components (year, month, day, hour, minute, second). This crate
//! converts between the two representations, plus a compact third encoding
//! used by hardware tables: an integer count of seconds since the start of a
//! calendar year.
//!
//! # Conventions
//!
//! - Epoch reference: Unix epoch, 1970-01-01T00:00:00 UTC
//! - Calendar: proleptic Gregorian (4/100/400 leap year rule)
//! - No leap second handling; every day is exactly 86400 seconds
//!
//! # Usage
//!
//! ```
//! use radtime::{calendar_to_epoch, epoch_to_calendar};
//!
//! let t = epoch_to_calendar(0.0);
//! assert_eq!((t.year, t.month, t.day), (1970, 1, 1));
//! assert_eq!((t.hour, t.minute), (0, 0));
//! assert_eq!(t.second, 0.0);
//!
//! let instant = calendar_to_epoch(2000, 1, 1, 0, 0, 0.0);
//! assert_eq!(instant, 946_684_800.0);
//! ```
//!
//! The raw conversion functions are total over valid calendar input; they do
//! not validate. Callers that need validation go through
//! [`CalendarTime::new`], which rejects dates like February 30 or month 13.

pub mod calendar;
pub mod constants;
pub mod epoch;
pub mod parsing;
pub mod yrsec;

pub use epoch::{calendar_to_epoch, epoch_to_calendar, CalendarTime};
pub use parsing::parse_iso8601;
pub use yrsec::{calendar_to_yrsec, yrsec_to_calendar};

use thiserror::Error;

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

/// Error type for calendar validation and parsing.
///
/// The conversion functions themselves are total and never fail; errors arise
/// only from the checked constructor and the string parser.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    /// Invalid calendar date (e.g. February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// Time-of-day component outside its range.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// Malformed timestamp string.
    #[error("Parse error: {0}")]
    ParseError(String),
}
