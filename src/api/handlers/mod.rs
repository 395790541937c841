//! HTTP request handlers for API endpoints.
//!
//! Each handler reads one path parameter, calls one service lookup and
//! answers with indented JSON or the error envelope from [`crate::error`].

pub mod comments;
pub mod docs;
pub mod ping;
pub mod posts;
pub mod tags;
pub mod users;

pub use comments::{comment_handler, comment_post_handler, comments_handler};
pub use docs::api_documentation_handler;
pub use ping::ping_handler;
pub use posts::{post_handler, post_slug_handler, posts_handler};
pub use tags::{tag_handler, tag_slug_handler, tags_handler};
pub use users::{user_email_handler, user_handler, user_slug_handler, users_handler};
