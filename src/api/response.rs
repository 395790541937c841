//! Response bodies shared by the API handlers.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body rendered with two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                )],
                err.to_string(),
            )
                .into_response(),
        }
    }
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Successful outcome of an API handler.
///
/// `NotImplemented` marks resources the API routes but does not serve yet.
/// It answers 200 with `{"message": "Not implemented"}`.
#[derive(Debug)]
pub enum Reply<T> {
    Found(T),
    NotImplemented,
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Found(value) => PrettyJson(value).into_response(),
            Reply::NotImplemented => PrettyJson(MessageBody {
                message: "Not implemented",
            })
            .into_response(),
        }
    }
}

/// Result type returned by every lookup handler.
pub type ApiResult<T> = Result<Reply<T>, crate::error::AppError>;
