//! Handler for a user's exercise log.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::logs::{LogQuery, LogResponse};
use crate::api::extract::LenientQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a user's exercise log.
///
/// # Endpoint
///
/// `GET /api/users/{_id}/logs`
///
/// # Query Parameters
///
/// - `from` (optional): inclusive lower date bound
/// - `to` (optional): inclusive upper date bound
/// - `limit` (optional): maximum number of entries
///
/// Bounds are parsed like the timestamp endpoint; unparsable bounds and a
/// non-numeric limit are ignored. Filters apply in the order `from`, `to`,
/// `limit`.
///
/// # Response
///
/// ```json
/// {
///   "_id": "5fb5853f734231456ccb3b05",
///   "username": "fcc_test",
///   "count": 1,
///   "log": [
///     { "description": "test", "duration": 60, "date": "Mon Jan 01 1990" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Answers `{ "error": "Unknown userId" }` for an unknown user.
pub async fn logs_handler(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
    LenientQuery(query): LenientQuery<LogQuery>,
) -> Result<Json<LogResponse>, AppError> {
    let Path(user_id) = user_id.map_err(|_| AppError::NotFound)?;
    let filter = query.to_filter();

    let (user, log) = state
        .exercise_service
        .get_log(&user_id, filter.clone())
        .await?;

    Ok(Json(LogResponse::new(user, &filter, log)))
}
