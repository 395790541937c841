//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::ping::PingResponse;

/// Reports that the process is serving requests.
///
/// # Endpoint
///
/// `GET /ping`
///
/// Does not touch the database, so it answers even when the store is down.
/// The body is compact JSON: `{"status":"pong"}`.
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse::pong())
}
