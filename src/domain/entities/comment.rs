//! Comment entity.

use chrono::{DateTime, Utc};

/// A reader comment attached to a post.
///
/// `parent_id` points at the comment being replied to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub author: String,
    pub author_email: String,
    pub author_url: Option<String>,
    pub content: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
