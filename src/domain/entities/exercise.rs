//! Exercise entity and log filtering criteria.

use chrono::{DateTime, Utc};

use crate::utils::date_parser::truncate_to_millis;

/// A single logged exercise, immutable once created.
///
/// `date` is stored at millisecond precision; it is rendered as a readable
/// calendar day only at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub user_id: String,
    pub description: String,
    pub duration: u32,
    pub date: DateTime<Utc>,
}

/// Input data for appending an exercise to a user's log.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: String,
    pub description: String,
    pub duration: u32,
    pub date: DateTime<Utc>,
}

impl From<NewExercise> for Exercise {
    fn from(new: NewExercise) -> Self {
        Self {
            user_id: new.user_id,
            description: new.description,
            duration: new.duration,
            date: truncate_to_millis(new.date),
        }
    }
}

/// Filter criteria for log queries.
///
/// Bounds are inclusive. Filters apply in the order `from`, `to`, `limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Caps the number of returned entries.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Applies the filter to a log kept in insertion order.
    pub fn apply<'a, I>(&self, log: I) -> Vec<Exercise>
    where
        I: IntoIterator<Item = &'a Exercise>,
    {
        let filtered = log
            .into_iter()
            .filter(|e| self.from.is_none_or(|from| e.date >= from))
            .filter(|e| self.to.is_none_or(|to| e.date <= to))
            .cloned();

        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}
