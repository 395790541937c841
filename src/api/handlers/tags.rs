//! Handlers for tag endpoints.

use axum::extract::State;

use crate::api::dto::tag::TagItem;
use crate::api::extract::{PathId, TagSlug};
use crate::api::response::{ApiResult, Reply};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every tag.
///
/// # Endpoint
///
/// `GET /api/tags/`
///
/// # Errors
///
/// Returns 404 if the store query fails (500 in normalized mode).
pub async fn tags_handler(State(state): State<AppState>) -> ApiResult<Vec<TagItem>> {
    let tags = state
        .tag_service
        .list_tags()
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(tags.into_iter().map(TagItem::from).collect()))
}

/// Retrieves the tag with the given ID.
///
/// # Endpoint
///
/// `GET /api/tags/{id}`
///
/// # Errors
///
/// Returns 500 if `id` is not an integer (400 in normalized mode).
/// Returns 404 if no tag has this ID.
pub async fn tag_handler(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<TagItem> {
    let tag = state
        .tag_service
        .get_tag_by_id(id)
        .await
        .map_err(|e| AppError::lookup(state.status_mode, e))?;

    Ok(Reply::Found(tag.into()))
}

/// Retrieves the tag with the given slug.
///
/// # Endpoint
///
/// `GET /api/tags/slug/{slug}`
///
/// # Errors
///
/// Returns 500 if no tag has this slug. Existing clients depend on this
/// status; normalized mode answers 404 instead.
pub async fn tag_slug_handler(
    State(state): State<AppState>,
    TagSlug(slug): TagSlug,
) -> ApiResult<TagItem> {
    let tag = state
        .tag_service
        .get_tag_by_slug(&slug)
        .await
        .map_err(|e| AppError::tag_slug_lookup(state.status_mode, e))?;

    Ok(Reply::Found(tag.into()))
}
