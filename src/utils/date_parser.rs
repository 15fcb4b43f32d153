//! Date parsing and rendering utilities.
//!
//! Accepts either an all-digit epoch-millisecond string or a calendar date in
//! one of the common textual formats. Inputs without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Largest magnitude of epoch milliseconds accepted (±100,000,000 days).
const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Date-time layouts tried after RFC 3339 / RFC 2822.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts, interpreted as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a %b %d %Y",
    "%a, %d %b %Y",
    "%A, %B %d, %Y",
];

/// Errors that can occur while parsing a date.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Empty date input")]
    Empty,

    #[error("Epoch milliseconds out of range: {0}")]
    OutOfRange(String),

    #[error("Unrecognized date format: {0}")]
    UnrecognizedFormat(String),
}

/// Parses a date string into a UTC instant.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored; empty input is an error
/// 2. All-digit input is epoch milliseconds
/// 3. Anything else is tried against RFC 3339, RFC 2822 and the
///    [`DATE_TIME_FORMATS`] / [`DATE_FORMATS`] layouts in order
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_date("0").unwrap().timestamp_millis(), 0);
/// assert_eq!(parse_date("2016-12-25").unwrap().timestamp_millis(), 1_482_624_000_000);
/// assert!(parse_date("not-a-date").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(DateParseError::Empty);
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        return parse_epoch_millis(input);
    }

    parse_calendar(input)
}

fn parse_epoch_millis(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let millis: i64 = input
        .parse()
        .map_err(|_| DateParseError::OutOfRange(input.to_string()))?;

    if millis > MAX_EPOCH_MILLIS {
        return Err(DateParseError::OutOfRange(input.to_string()));
    }

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DateParseError::OutOfRange(input.to_string()))
}

fn parse_calendar(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
        }
    }

    Err(DateParseError::UnrecognizedFormat(input.to_string()))
}

/// Drops sub-millisecond precision so the instant equals its epoch-millis value.
pub fn truncate_to_millis(date: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(date.timestamp_millis()).unwrap_or(date)
}

/// Renders an instant as an HTTP-date, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
pub fn to_utc_string(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Renders the calendar day of an instant, e.g. `Thu Jan 01 1970`.
pub fn to_readable_date(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epoch_zero() {
        let date = parse_date("0").unwrap();
        assert_eq!(date.timestamp_millis(), 0);
        assert_eq!(to_utc_string(&date), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_parse_epoch_millis() {
        let date = parse_date("1451001600000").unwrap();
        assert_eq!(to_utc_string(&date), "Fri, 25 Dec 2015 00:00:00 GMT");
    }

    #[test]
    fn test_parse_epoch_overflow() {
        assert!(matches!(
            parse_date("99999999999999999999999"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_date("8640000000000001"),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_date("2016-12-25").unwrap();
        assert_eq!(date.timestamp_millis(), 1_482_624_000_000);
        assert_eq!(to_utc_string(&date), "Sun, 25 Dec 2016 00:00:00 GMT");
    }

    #[test]
    fn test_parse_iso_date_time_without_offset() {
        let date = parse_date("2016-12-25T10:30:00").unwrap();
        assert_eq!(to_utc_string(&date), "Sun, 25 Dec 2016 10:30:00 GMT");

        let date = parse_date("2016-12-25 10:30").unwrap();
        assert_eq!(to_utc_string(&date), "Sun, 25 Dec 2016 10:30:00 GMT");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let date = parse_date("2016-12-25T02:00:00+02:00").unwrap();
        assert_eq!(to_utc_string(&date), "Sun, 25 Dec 2016 00:00:00 GMT");
    }

    #[test]
    fn test_parse_rfc2822() {
        let date = parse_date("Thu, 01 Jan 1970 00:00:00 GMT").unwrap();
        assert_eq!(date.timestamp_millis(), 0);
    }

    #[test]
    fn test_parse_textual_dates() {
        let expected = 1_482_624_000_000;
        assert_eq!(parse_date("December 25, 2016").unwrap().timestamp_millis(), expected);
        assert_eq!(parse_date("25 December 2016").unwrap().timestamp_millis(), expected);
        assert_eq!(parse_date("Sun Dec 25 2016").unwrap().timestamp_millis(), expected);
        assert_eq!(parse_date("2016/12/25").unwrap().timestamp_millis(), expected);
        assert_eq!(parse_date("12/25/2016").unwrap().timestamp_millis(), expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_date("not-a-date"),
            Err(DateParseError::UnrecognizedFormat(_))
        ));
        assert!(parse_date("2016-13-45").is_err());
        assert_eq!(parse_date("   "), Err(DateParseError::Empty));
    }

    #[test]
    fn test_truncate_to_millis() {
        let date = parse_date("2024-01-01T00:00:00.000400Z").unwrap();
        assert_ne!(date, parse_date("1704067200000").unwrap());

        let truncated = truncate_to_millis(date);
        assert_eq!(truncated, parse_date("1704067200000").unwrap());
        assert_eq!(truncate_to_millis(truncated), truncated);
    }

    #[test]
    fn test_readable_date() {
        let date = parse_date("1990-01-01").unwrap();
        assert_eq!(to_readable_date(&date), "Mon Jan 01 1990");
    }
}
