//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::error::ModelError;
use crate::domain::repositories::{PostFilter, PostOrder, PostRepository};

const SELECT_POST: &str = r#"
    SELECT id, title, slug, markdown, html, image, category, meta_description,
           is_featured, is_page, allow_comment, is_published, comment_count,
           author_id, created_at, updated_at, published_at
    FROM posts
"#;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    markdown: String,
    html: String,
    image: Option<String>,
    category: Option<String>,
    meta_description: Option<String>,
    is_featured: bool,
    is_page: bool,
    allow_comment: bool,
    is_published: bool,
    comment_count: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            title: r.title,
            slug: r.slug,
            markdown: r.markdown,
            html: r.html,
            image: r.image,
            category: r.category,
            meta_description: r.meta_description,
            is_featured: r.is_featured,
            is_page: r.is_page,
            allow_comment: r.allow_comment,
            is_published: r.is_published,
            comment_count: r.comment_count,
            author_id: r.author_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            published_at: r.published_at,
        }
    }
}

fn order_clause(order: PostOrder) -> &'static str {
    match order {
        PostOrder::PublishedDesc => "ORDER BY published_at DESC NULLS LAST, id DESC",
        PostOrder::UpdatedDesc => "ORDER BY updated_at DESC, id DESC",
    }
}

/// PostgreSQL repository for posts and pages.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ModelError> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Post::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, ModelError> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Post::from))
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, ModelError> {
        let sql = format!(
            "{SELECT_POST} WHERE ($1 OR NOT is_page) AND (NOT $2 OR is_published) {}",
            order_clause(filter.order)
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(filter.include_pages)
            .bind(filter.only_published)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}
