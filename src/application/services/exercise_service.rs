//! Exercise tracker service: users and their exercise logs.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Exercise, LogFilter, NewExercise, NewUser, User};
use crate::domain::repositories::{ExerciseRepository, UserRepository};
use crate::error::AppError;

/// Service for registering users and managing their exercise logs.
pub struct ExerciseService<U: UserRepository, E: ExerciseRepository> {
    user_repository: Arc<U>,
    exercise_repository: Arc<E>,
}

impl<U: UserRepository, E: ExerciseRepository> ExerciseService<U, E> {
    /// Creates a new exercise service.
    pub fn new(user_repository: Arc<U>, exercise_repository: Arc<E>) -> Self {
        Self {
            user_repository,
            exercise_repository,
        }
    }

    /// Registers a user. Usernames are not required to be unique.
    pub async fn create_user(&self, username: String) -> Result<User, AppError> {
        let user = self.user_repository.create(NewUser { username }).await?;
        debug!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Lists all users in creation order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repository.list().await
    }

    /// Appends an exercise to a user's log.
    ///
    /// `date` defaults to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        description: String,
        duration: u32,
        date: Option<DateTime<Utc>>,
    ) -> Result<(User, Exercise), AppError> {
        let user = self.get_user(user_id).await?;

        let exercise = self
            .exercise_repository
            .append(NewExercise {
                user_id: user.id.clone(),
                description,
                duration,
                date: date.unwrap_or_else(Utc::now),
            })
            .await?;

        Ok((user, exercise))
    }

    /// Returns a user together with their filtered exercise log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_log(
        &self,
        user_id: &str,
        filter: LogFilter,
    ) -> Result<(User, Vec<Exercise>), AppError> {
        let user = self.get_user(user_id).await?;

        let log = self
            .exercise_repository
            .list_for_user(&user.id, &filter)
            .await?;

        Ok((user, log))
    }

    async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
