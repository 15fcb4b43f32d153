//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short}`
///
/// # Response
///
/// `302 Found` with a `Location` header pointing at the original URL in its
/// serialized (percent-encoded) form.
///
/// # Errors
///
/// Answers `{ "error": "Invalid short URL" }` for identifiers never issued.
pub async fn redirect_handler(
    short: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(short) = short.map_err(|_| AppError::InvalidShortUrl)?;
    let entry = state.shortener_service.resolve(&short).await?;
    debug!("Redirecting {} -> {}", entry.id, entry.original_url);

    let target = Url::parse(&entry.original_url)
        .map_err(|e| AppError::internal(format!("Stored URL does not parse: {}", e)))?;
    let location = HeaderValue::from_str(target.as_str())
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
