//! API route configuration.

use crate::api::handlers::{
    add_exercise_handler, create_user_handler, hello_handler, list_users_handler, logs_handler,
    redirect_handler, shorten_handler, timestamp_handler, timestamp_now_handler, whoami_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                  - Greeting
/// - `GET  /whoami`                 - Caller IP, language and user agent
/// - `POST /shorturl`               - Register a URL
/// - `GET  /shorturl/{short}`       - Redirect to a registered URL
/// - `GET  /time`                   - Current time
/// - `GET  /time/{date}`            - Parse a date
/// - `GET  /users`                  - List users
/// - `POST /users`                  - Register a user
/// - `POST /users/{_id}/exercises`  - Log an exercise
/// - `GET  /users/{_id}/logs`       - Exercise log with `from`, `to`, `limit`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/whoami", get(whoami_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short}", get(redirect_handler))
        .route("/time", get(timestamp_now_handler))
        .route("/time/{date}", get(timestamp_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{_id}/exercises", post(add_exercise_handler))
        .route("/users/{_id}/logs", get(logs_handler))
}
