//! Handlers for comment endpoints.

use axum::extract::State;

use crate::api::dto::comment::CommentItem;
use crate::api::extract::PathId;
use crate::api::response::{ApiResult, Reply};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all comments. Not served yet.
///
/// # Endpoint
///
/// `GET /api/comments`
///
/// Always answers `{"message": "Not implemented"}`.
pub async fn comments_handler() -> ApiResult<Vec<CommentItem>> {
    Ok(Reply::NotImplemented)
}

/// Retrieves the comment with the given ID.
///
/// # Endpoint
///
/// `GET /api/comments/{id}`
///
/// # Errors
///
/// Returns 500 if `id` is not an integer (400 in normalized mode).
/// Returns 404 if no comment has this ID.
pub async fn comment_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<CommentItem> {
    let comment = state
        .comment_service
        .get_comment_by_id(id)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(comment.into()))
}

/// Retrieves the comments on the post with the given ID, oldest first.
///
/// # Endpoint
///
/// `GET /api/comments/post/{id}`
///
/// A post without comments yields `[]`.
///
/// # Errors
///
/// Returns 500 if `id` is not an integer (400 in normalized mode).
/// Returns 404 if the post does not exist.
pub async fn comment_post_handler(
    State(state): State<AppState>,
    PathId(post_id): PathId,
) -> ApiResult<Vec<CommentItem>> {
    let comments = state
        .comment_service
        .comments_for_post(post_id)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(
        comments.into_iter().map(CommentItem::from).collect(),
    ))
}
