//! API route configuration.
//!
//! All routes are read-only `GET` endpoints and require no authentication.

use crate::api::handlers::{
    api_documentation_handler, comment_handler, comment_post_handler, comments_handler,
    post_handler, post_slug_handler, posts_handler, tag_handler, tag_slug_handler, tags_handler,
    user_email_handler, user_handler, user_slug_handler, users_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET /api`                       - Route manifest
/// - `GET /api/comments`              - Not implemented
/// - `GET /api/comments/{id}`         - Comment by ID
/// - `GET /api/comments/post/{id}`    - Comments on a post
/// - `GET /api/posts`                 - Published posts, newest first
/// - `GET /api/posts/{id}`            - Post by ID
/// - `GET /api/posts/slug/{slug}`     - Post by slug
/// - `GET /api/tags`                  - All tags
/// - `GET /api/tags/{id}`             - Tag by ID
/// - `GET /api/tags/slug/{slug}`      - Tag by slug
/// - `GET /api/users`                 - Not implemented
/// - `GET /api/users/{id}`            - User by ID
/// - `GET /api/users/slug/{slug}`     - User by slug
/// - `GET /api/users/email/{email}`   - User by email
///
/// Trailing slashes are trimmed before routing, see [`crate::routes::app_router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_documentation_handler))
        .route("/api/comments", get(comments_handler))
        .route("/api/comments/{id}", get(comment_handler))
        .route("/api/comments/post/{id}", get(comment_post_handler))
        .route("/api/posts", get(posts_handler))
        .route("/api/posts/{id}", get(post_handler))
        .route("/api/posts/slug/{slug}", get(post_slug_handler))
        .route("/api/tags", get(tags_handler))
        .route("/api/tags/{id}", get(tag_handler))
        .route("/api/tags/slug/{slug}", get(tag_slug_handler))
        .route("/api/users", get(users_handler))
        .route("/api/users/{id}", get(user_handler))
        .route("/api/users/slug/{slug}", get(user_slug_handler))
        .route("/api/users/email/{email}", get(user_email_handler))
}
