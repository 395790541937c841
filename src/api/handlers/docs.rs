//! Handler for the API documentation manifest.

use crate::api::dto::docs::{API_DOCUMENTATION, ApiDocumentation};
use crate::api::response::PrettyJson;

/// Lists which URL serves which resource, similar to `https://api.github.com`.
///
/// # Endpoint
///
/// `GET /api/`
pub async fn api_documentation_handler() -> PrettyJson<ApiDocumentation> {
    PrettyJson(API_DOCUMENTATION)
}
