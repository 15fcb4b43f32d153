//! Parsed timestamp value.

use chrono::{DateTime, Utc};

use crate::utils::date_parser::{to_readable_date, to_utc_string};

/// A point in time as reported by the timestamp microservice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self(date)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Epoch milliseconds.
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// HTTP-date rendering, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
    pub fn utc_string(&self) -> String {
        to_utc_string(&self.0)
    }

    /// Calendar-day rendering, e.g. `Thu Jan 01 1970`.
    pub fn readable(&self) -> String {
        to_readable_date(&self.0)
    }
}
