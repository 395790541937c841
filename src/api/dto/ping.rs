//! DTO for the liveness endpoint.

use serde::Serialize;

/// Body of `GET /ping`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self { status: "pong" }
    }
}
