//! Application error type and its HTTP rendering.
//!
//! Every user-facing failure is answered with `200 OK` and a body of the form
//! `{"error": "<message>"}`. Only [`AppError::Internal`] maps to a 5xx status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AppError {
    /// Malformed URL or a hostname that does not resolve.
    #[error("Invalid URL")]
    InvalidUrl,

    /// Short identifier that was never issued.
    #[error("Invalid short URL")]
    InvalidShortUrl,

    /// Date input that cannot be parsed.
    #[error("Invalid Date")]
    InvalidDate,

    /// Unknown user id.
    #[error("Unknown userId")]
    NotFound,

    /// Form or query input that cannot be coerced into a typed request.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid input".to_string());

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Internal(ref message) = self {
            tracing::error!("Internal error: {}", message);
        }

        (status, Json(self.to_body())).into_response()
    }
}
