//! DTOs for post endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Post;

/// JSON representation of a post or page.
#[derive(Debug, Serialize)]
pub struct PostItem {
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

impl From<Post> for PostItem {
    fn from(p: Post) -> Self {
        PostItem {
            id: p.id,
            title: p.title,
            slug: p.slug,
            markdown: p.markdown,
            html: p.html,
            image: p.image,
            category: p.category,
            meta_description: p.meta_description,
            is_featured: p.is_featured,
            is_page: p.is_page,
            allow_comment: p.allow_comment,
            is_published: p.is_published,
            comment_count: p.comment_count,
            author_id: p.author_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            published_at: p.published_at,
        }
    }
}
