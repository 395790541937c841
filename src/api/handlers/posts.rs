//! Handlers for post endpoints.

use axum::extract::State;

use crate::api::dto::post::PostItem;
use crate::api::extract::{PathId, PathParam};
use crate::api::response::{ApiResult, Reply};
use crate::error::AppError;
use crate::state::AppState;

/// Lists published posts, newest publication first. Pages are excluded.
///
/// # Endpoint
///
/// `GET /api/posts/`
///
/// # Errors
///
/// Returns 404 if the store query fails (500 in normalized mode).
pub async fn posts_handler(State(state): State<AppState>) -> ApiResult<Vec<PostItem>> {
    let posts = state
        .post_service
        .list_published_posts()
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(posts.into_iter().map(PostItem::from).collect()))
}

/// Retrieves the post with the given ID.
///
/// # Endpoint
///
/// `GET /api/posts/{id}`
///
/// # Errors
///
/// Returns 500 if `id` is not an integer (400 in normalized mode).
/// Returns 404 if no post has this ID.
pub async fn post_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<PostItem> {
    let post = state
        .post_service
        .get_post_by_id(id)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(post.into()))
}

/// Retrieves the post with the given slug.
///
/// # Endpoint
///
/// `GET /api/posts/slug/{slug}`
///
/// # Errors
///
/// Returns 404 if no post has this slug.
pub async fn post_slug_handler(
    State(state): State<AppState>,
    PathParam(slug): PathParam,
) -> ApiResult<PostItem> {
    let post = state
        .post_service
        .get_post_by_slug(&slug)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(post.into()))
}
