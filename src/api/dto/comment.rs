//! DTOs for comment endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Comment;

/// JSON representation of a comment.
#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub id: i64,
    pub post_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub author: String,
    pub author_email: String,
    pub author_url: Option<String>,
    pub content: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentItem {
    fn from(c: Comment) -> Self {
        CommentItem {
            id: c.id,
            post_id: c.post_id,
            parent_id: c.parent_id,
            author: c.author,
            author_email: c.author_email,
            author_url: c.author_url,
            content: c.content,
            approved: c.approved,
            created_at: c.created_at,
        }
    }
}
