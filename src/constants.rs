pub const SECONDS_PER_MINUTE: i64 = 60;

pub const SECONDS_PER_HOUR: i64 = 3_600;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

/// Modified Julian Date of 1970-01-01 (the Unix epoch).
pub const UNIX_EPOCH_MJD: i64 = 40_587;

/// Offset from Modified Julian Date to Julian Day Number (noon-based).
pub const MJD_TO_JDN: i64 = 2_400_001;

/// Days in each month for a non-leap year.
pub const DAYS_PER_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const DAYS_PER_YEAR: i32 = 365;

pub const DAYS_PER_LEAP_YEAR: i32 = 366;
