//! Handlers for the timestamp endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::debug;

use crate::api::dto::timestamp::TimestampResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Parses a date path segment.
///
/// # Endpoint
///
/// `GET /api/time/{date}`
///
/// `date` is either epoch milliseconds (all digits) or a calendar date such
/// as `2016-12-25` or `December 25, 2016`.
///
/// # Response
///
/// ```json
/// { "unix": 1482624000000, "utc": "Sun, 25 Dec 2016 00:00:00 GMT" }
/// ```
///
/// # Errors
///
/// Answers `{ "error": "Invalid Date" }` if the date cannot be decoded or parsed.
pub async fn timestamp_handler(
    State(state): State<AppState>,
    date: Result<Path<String>, PathRejection>,
) -> Result<Json<TimestampResponse>, AppError> {
    let Path(date) = date.map_err(|rejection| {
        debug!("Undecodable date segment: {}", rejection);
        AppError::InvalidDate
    })?;

    let ts = state.timestamp_service.parse(Some(&date))?;

    Ok(Json(TimestampResponse::from(ts)))
}

/// Reports the current time.
///
/// # Endpoint
///
/// `GET /api/time`
pub async fn timestamp_now_handler(
    State(state): State<AppState>,
) -> Result<Json<TimestampResponse>, AppError> {
    let ts = state.timestamp_service.parse(None)?;

    Ok(Json(TimestampResponse::from(ts)))
}
