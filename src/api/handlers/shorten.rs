//! Handler for URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::api::extract::LenientForm;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short identifier.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": "1" }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Answers `{ "error": "Invalid URL" }` if the URL is malformed or its
/// hostname does not resolve.
pub async fn shorten_handler(
    State(state): State<AppState>,
    LenientForm(form): LenientForm<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short = state.shortener_service.shorten(&form.url).await?;

    Ok(Json(ShortenResponse::from(short)))
}
