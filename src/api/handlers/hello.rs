//! Handler for the greeting endpoint.

use axum::Json;

use crate::api::dto::hello::HelloResponse;

/// Returns a fixed greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
///
/// # Response
///
/// ```json
/// { "greeting": "hello API" }
/// ```
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: "hello API".to_string(),
    })
}
