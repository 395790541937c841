//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Comment;
use crate::domain::error::ModelError;
use crate::domain::repositories::CommentRepository;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    parent_id: Option<i64>,
    author: String,
    author_email: String,
    author_url: Option<String>,
    content: String,
    approved: bool,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            post_id: r.post_id,
            parent_id: r.parent_id,
            author: r.author,
            author_email: r.author_email,
            author_url: r.author_url,
            content: r.content,
            approved: r.approved,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for reader comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ModelError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, parent_id, author, author_email, author_url,
                   content, approved, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, ModelError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, post_id, parent_id, author, author_email, author_url,
                   content, approved, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}
