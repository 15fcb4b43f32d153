//! DTOs for the exercise log endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Exercise, LogFilter, Timestamp, User};
use crate::utils::date_parser::parse_date;

/// Query parameters of `GET /api/users/{_id}/logs`.
///
/// Unparsable `from` / `to` bounds and a non-numeric `limit` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Coerces the raw query into a [`LogFilter`].
    pub fn to_filter(&self) -> LogFilter {
        let from = self.from.as_deref().and_then(|s| parse_date(s).ok());
        let to = self.to.as_deref().and_then(|s| parse_date(s).ok());
        let limit = self
            .limit
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok());

        LogFilter::new()
            .with_date_range(from, to)
            .with_limit(limit)
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: Timestamp::new(exercise.date).readable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: User, filter: &LogFilter, log: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = log.into_iter().map(LogEntry::from).collect();

        Self {
            id: user.id,
            username: user.username,
            from: filter.from.map(|d| Timestamp::new(d).readable()),
            to: filter.to.map(|d| Timestamp::new(d).readable()),
            count: log.len(),
            log,
        }
    }
}
