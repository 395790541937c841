//! HTTP error envelope and status selection.
//!
//! Every failing handler answers with the same body:
//!
//! ```json
//! {
//!   "statusCode": 404,
//!   "error": "post not found"
//! }
//! ```
//!
//! Which status a failure gets is decided by [`StatusMode`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::api::response::PrettyJson;
use crate::domain::error::ModelError;

/// Status code table applied to handler failures.
///
/// | Failure                    | `Legacy` | `Normalized` |
/// |----------------------------|----------|--------------|
/// | malformed numeric id       | 500      | 400          |
/// | record not found           | 404      | 404          |
/// | other store failure        | 404      | 500          |
/// | tag-by-slug, any failure   | 500      | as above     |
///
/// `Legacy` keeps existing clients working byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    #[default]
    Legacy,
    Normalized,
}

impl StatusMode {
    /// Status for a path parameter that failed to parse.
    pub fn malformed_param(self) -> StatusCode {
        match self {
            StatusMode::Legacy => StatusCode::INTERNAL_SERVER_ERROR,
            StatusMode::Normalized => StatusCode::BAD_REQUEST,
        }
    }

    /// Status for a failed model lookup.
    pub fn lookup_failure(self, err: &ModelError) -> StatusCode {
        match self {
            StatusMode::Legacy => StatusCode::NOT_FOUND,
            StatusMode::Normalized if err.is_not_found() => StatusCode::NOT_FOUND,
            StatusMode::Normalized => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status for a failed tag-by-slug lookup.
    pub fn tag_slug_failure(self, err: &ModelError) -> StatusCode {
        match self {
            StatusMode::Legacy => StatusCode::INTERNAL_SERVER_ERROR,
            StatusMode::Normalized => self.lookup_failure(err),
        }
    }
}

impl fmt::Display for StatusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMode::Legacy => f.write_str("legacy"),
            StatusMode::Normalized => f.write_str("normalized"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown status mode '{0}', expected 'legacy' or 'normalized'")]
pub struct UnknownStatusMode(String);

impl FromStr for StatusMode {
    type Err = UnknownStatusMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(StatusMode::Legacy),
            "normalized" => Ok(StatusMode::Normalized),
            _ => Err(UnknownStatusMode(s.to_string())),
        }
    }
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: String,
}

/// A handler failure: the status to answer with and the message to report.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A path parameter could not be parsed.
    pub fn malformed_param(mode: StatusMode, err: impl fmt::Display) -> Self {
        Self::new(mode.malformed_param(), err.to_string())
    }

    /// A model lookup failed.
    pub fn lookup(mode: StatusMode, err: ModelError) -> Self {
        Self::new(mode.lookup_failure(&err), err.to_string())
    }

    /// A tag-by-slug lookup failed.
    pub fn tag_slug_lookup(mode: StatusMode, err: ModelError) -> Self {
        Self::new(mode.tag_slug_failure(&err), err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            status_code: self.status.as_u16(),
            error: self.message,
        };

        (self.status, PrettyJson(body)).into_response()
    }
}
