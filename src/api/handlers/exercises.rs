//! Handler for logging an exercise.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::exercises::{AddExerciseForm, ExerciseResponse};
use crate::api::extract::LenientForm;
use crate::error::AppError;
use crate::state::AppState;

/// Appends an exercise to a user's log.
///
/// # Endpoint
///
/// `POST /api/users/{_id}/exercises`
///
/// # Request Body
///
/// Form fields `description`, `duration` (minutes) and optional `date`
/// (defaults to now).
///
/// # Response
///
/// ```json
/// {
///   "_id": "5fb5853f734231456ccb3b05",
///   "username": "fcc_test",
///   "description": "test",
///   "duration": 60,
///   "date": "Mon Jan 01 1990"
/// }
/// ```
///
/// # Errors
///
/// - `{ "error": "Unknown userId" }` for an unknown user
/// - `{ "error": "Invalid Date" }` for an unparsable date
/// - `{ "error": "<reason>" }` for a missing description or a bad duration
pub async fn add_exercise_handler(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
    LenientForm(form): LenientForm<AddExerciseForm>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let Path(user_id) = user_id.map_err(|_| AppError::NotFound)?;
    let request = form.into_request()?;

    let added = state
        .exercise_service
        .add_exercise(&user_id, request.description, request.duration, request.date)
        .await?;

    Ok(Json(ExerciseResponse::from(added)))
}
