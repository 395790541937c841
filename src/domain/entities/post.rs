//! Post entity.

use chrono::{DateTime, Utc};

/// A blog post or a static page.
///
/// Pages share the posts table and are distinguished by `is_page`.
/// `published_at` is set the first time the post is published.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub html: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub meta_description: Option<String>,
    pub is_featured: bool,
    pub is_page: bool,
    pub allow_comment: bool,
    pub is_published: bool,
    pub comment_count: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}
