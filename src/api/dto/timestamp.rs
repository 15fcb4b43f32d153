//! DTO for the timestamp endpoint.

use serde::Serialize;

use crate::domain::entities::Timestamp;

/// `unix` is in epoch milliseconds; `utc` is an HTTP-date.
#[derive(Debug, Serialize)]
pub struct TimestampResponse {
    pub unix: i64,
    pub utc: String,
}

impl From<Timestamp> for TimestampResponse {
    fn from(ts: Timestamp) -> Self {
        Self {
            unix: ts.unix_millis(),
            utc: ts.utc_string(),
        }
    }
}
