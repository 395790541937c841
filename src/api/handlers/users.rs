//! Handlers for user endpoints.

use axum::extract::State;

use crate::api::dto::user::UserItem;
use crate::api::extract::{PathId, PathParam};
use crate::api::response::{ApiResult, Reply};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users. Not served yet.
///
/// # Endpoint
///
/// `GET /api/users/`
///
/// Always answers `{"message": "Not implemented"}`.
pub async fn users_handler() -> ApiResult<Vec<UserItem>> {
    Ok(Reply::NotImplemented)
}

/// Retrieves the user with the given ID.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 500 if `id` is not an integer (400 in normalized mode).
/// Returns 404 if no user has this ID.
pub async fn user_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<UserItem> {
    let user = state
        .user_service
        .get_user_by_id(id)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(user.into()))
}

/// Retrieves the user with the given profile slug.
///
/// # Endpoint
///
/// `GET /api/users/slug/{slug}`
///
/// # Errors
///
/// Returns 404 if no user has this slug.
pub async fn user_slug_handler(
    State(state): State<AppState>,
    PathParam(slug): PathParam,
) -> ApiResult<UserItem> {
    let user = state
        .user_service
        .get_user_by_slug(&slug)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(user.into()))
}

/// Retrieves the user with the given email address.
///
/// # Endpoint
///
/// `GET /api/users/email/{email}`
///
/// # Errors
///
/// Returns 404 if no user has this email.
pub async fn user_email_handler(
    State(state): State<AppState>,
    PathParam(email): PathParam,
) -> ApiResult<UserItem> {
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(user.into()))
}
