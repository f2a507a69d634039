use crate::{CalendarTime, TimeError, TimeResult};

const MAX_TIMESTAMP_LENGTH: usize = 32;

/// Parses an ISO 8601 timestamp (`YYYY-MM-DDTHH:MM:SS[.sss][Z]`) into a
/// validated [`CalendarTime`].
///
/// A space is accepted in place of the `T` separator, and single-digit
/// components are tolerated. Calendar validity (leap days, month lengths)
/// is enforced through [`CalendarTime::new`].
pub fn parse_iso8601(s: &str) -> TimeResult<CalendarTime> {
    let s = s.trim();
    if s.len() > MAX_TIMESTAMP_LENGTH {
        return Err(TimeError::ParseError("input too long".to_string()));
    }
    let s = s.strip_suffix('Z').unwrap_or(s);

    let separator = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        TimeError::ParseError(format!(
            "invalid datetime '{}': expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;
    let (date_part, time_part) = (&s[..separator], &s[separator + 1..]);

    let mut date_fields = date_part.split('-');
    let year = parse_int_field(date_fields.next(), "year", 4, 4)?;
    let month = parse_int_field(date_fields.next(), "month", 1, 2)?;
    let day = parse_int_field(date_fields.next(), "day", 1, 2)?;
    if date_fields.next().is_some() {
        return Err(TimeError::ParseError(format!(
            "invalid date '{}': expected YYYY-MM-DD",
            date_part
        )));
    }

    let mut time_fields = time_part.split(':');
    let hour = parse_int_field(time_fields.next(), "hour", 1, 2)?;
    let minute = parse_int_field(time_fields.next(), "minute", 1, 2)?;
    let second_field = time_fields.next().ok_or_else(|| {
        TimeError::ParseError(format!(
            "invalid time '{}': expected HH:MM:SS",
            time_part
        ))
    })?;
    if time_fields.next().is_some() {
        return Err(TimeError::ParseError(format!(
            "invalid time '{}': expected HH:MM:SS",
            time_part
        )));
    }

    let second: f64 = second_field
        .parse()
        .map_err(|_| TimeError::ParseError(format!("invalid second '{}'", second_field)))?;

    CalendarTime::new(year, month, day, hour, minute, second)
}

/// Parses one dash- or colon-delimited field as a decimal integer, enforcing
/// a digit-count range so inputs like "20000-01-01" are rejected.
fn parse_int_field(field: Option<&str>, name: &str, min_len: usize, max_len: usize) -> TimeResult<i32> {
    let field = field
        .ok_or_else(|| TimeError::ParseError(format!("missing {} field", name)))?;
    if field.len() < min_len
        || field.len() > max_len
        || !field.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimeError::ParseError(format!(
            "invalid {} '{}'",
            name, field
        )));
    }
    field
        .parse()
        .map_err(|_| TimeError::ParseError(format!("invalid {} '{}'", name, field)))
}
