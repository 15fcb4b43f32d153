//! Repository trait for per-user exercise logs.

use crate::domain::entities::{Exercise, LogFilter, NewExercise};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for exercise logs.
///
/// Logs are append-only and kept in insertion order per user. The repository
/// does not check that the user exists; that is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Appends an exercise to the owner's log.
    async fn append(&self, new_exercise: NewExercise) -> Result<Exercise, AppError>;

    /// Returns the user's log with `filter` applied.
    ///
    /// An unknown user yields an empty log.
    async fn list_for_user(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError>;
}
