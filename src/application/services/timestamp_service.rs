//! Timestamp parsing service.

use tracing::debug;

use crate::domain::entities::Timestamp;
use crate::error::AppError;
use crate::utils::date_parser::parse_date;

/// Service turning an optional date parameter into a [`Timestamp`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampService;

impl TimestampService {
    pub fn new() -> Self {
        Self
    }

    /// Parses the date parameter of the timestamp endpoint.
    ///
    /// - `None` or an empty string yields the current time
    /// - An all-digit string is epoch milliseconds
    /// - Anything else is parsed as a calendar date
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDate`] if the input cannot be parsed.
    pub fn parse(&self, date: Option<&str>) -> Result<Timestamp, AppError> {
        match date.map(str::trim) {
            None | Some("") => Ok(Timestamp::now()),
            Some(input) => parse_date(input).map(Timestamp::new).map_err(|e| {
                debug!("Invalid date {:?}: {}", input, e);
                AppError::InvalidDate
            }),
        }
    }
}
