//! Request extractors for API handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::error::ModelError;
use crate::error::AppError;
use crate::state::AppState;

/// Numeric `{id}` path segment.
///
/// Unlike `Path<i64>`, a value that does not parse is rejected with the
/// standard error envelope, using the status chosen by the configured
/// [`crate::error::StatusMode`] and the parser's own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl FromRequestParts<AppState> for PathId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::malformed_param(state.status_mode, rejection.body_text())
            })?;

        parse_id(&raw)
            .map(PathId)
            .map_err(|err| AppError::malformed_param(state.status_mode, err))
    }
}

/// String `{slug}` or `{email}` path segment.
///
/// A segment that does not decode to UTF-8 cannot match any record, so it is
/// answered like a lookup miss, with the envelope and the decoder's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam(pub String);

impl FromRequestParts<AppState> for PathParam {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let status = state.status_mode.lookup_failure(&undecodable());
                AppError::new(status, rejection.body_text())
            })?;

        Ok(PathParam(raw))
    }
}

/// `{slug}` segment of the tag-by-slug route.
///
/// Same as [`PathParam`], but failures follow the tag-by-slug status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSlug(pub String);

impl FromRequestParts<AppState> for TagSlug {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let status = state.status_mode.tag_slug_failure(&undecodable());
                AppError::new(status, rejection.body_text())
            })?;

        Ok(TagSlug(raw))
    }
}

fn undecodable() -> ModelError {
    ModelError::not_found("record")
}

fn parse_id(raw: &str) -> Result<i64, std::num::ParseIntError> {
    raw.parse::<i64>()
}
