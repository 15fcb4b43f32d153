//! Handlers for exercise tracker users.

use axum::{Json, extract::State};

use crate::api::dto::users::{CreateUserForm, UserResponse};
use crate::api::extract::LenientForm;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Response
///
/// ```json
/// { "username": "fcc_test", "_id": "5fb5853f734231456ccb3b05" }
/// ```
pub async fn create_user_handler(
    State(state): State<AppState>,
    LenientForm(form): LenientForm<CreateUserForm>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.exercise_service.create_user(form.username).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Lists all users in creation order.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.exercise_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
