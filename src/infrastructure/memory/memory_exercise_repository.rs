//! In-memory implementation of the exercise repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Exercise, LogFilter, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

/// Exercise store keyed by user id; each log is append-only.
#[derive(Default)]
pub struct MemoryExerciseRepository {
    logs: RwLock<HashMap<String, Vec<Exercise>>>,
}

impl MemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for MemoryExerciseRepository {
    async fn append(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let exercise = Exercise::from(new_exercise);

        self.logs
            .write()
            .await
            .entry(exercise.user_id.clone())
            .or_default()
            .push(exercise.clone());

        Ok(exercise)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError> {
        let logs = self.logs.read().await;

        Ok(logs
            .get(user_id)
            .map(|log| filter.apply(log))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_exercise(user_id: &str, description: &str, day: u32) -> NewExercise {
        NewExercise {
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration: 20,
            date: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let repo = MemoryExerciseRepository::new();
        repo.append(new_exercise("u1", "run", 5)).await.unwrap();
        repo.append(new_exercise("u1", "swim", 1)).await.unwrap();
        repo.append(new_exercise("u1", "bike", 3)).await.unwrap();

        let log = repo.list_for_user("u1", &LogFilter::new()).await.unwrap();

        let names: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["run", "swim", "bike"]);
    }

    #[tokio::test]
    async fn test_logs_are_per_user() {
        let repo = MemoryExerciseRepository::new();
        repo.append(new_exercise("u1", "run", 1)).await.unwrap();
        repo.append(new_exercise("u2", "swim", 1)).await.unwrap();

        let log = repo.list_for_user("u2", &LogFilter::new()).await.unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].description, "swim");
    }

    #[tokio::test]
    async fn test_unknown_user_has_empty_log() {
        let repo = MemoryExerciseRepository::new();

        let log = repo.list_for_user("nobody", &LogFilter::new()).await.unwrap();

        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_filter_is_applied() {
        let repo = MemoryExerciseRepository::new();
        repo.append(new_exercise("u1", "a", 1)).await.unwrap();
        repo.append(new_exercise("u1", "b", 2)).await.unwrap();
        repo.append(new_exercise("u1", "c", 3)).await.unwrap();

        let filter = LogFilter::new()
            .with_date_range(None, Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()))
            .with_limit(Some(5));
        let log = repo.list_for_user("u1", &filter).await.unwrap();

        let names: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
