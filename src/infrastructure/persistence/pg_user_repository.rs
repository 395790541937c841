//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::error::ModelError;
use crate::domain::repositories::UserRepository;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    slug: String,
    email: String,
    image: Option<String>,
    cover: Option<String>,
    bio: Option<String>,
    website: Option<String>,
    location: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            name: r.name,
            slug: r.slug,
            email: r.email,
            image: r.image,
            cover: r.cover,
            bio: r.bio,
            website: r.website,
            location: r.location,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for author accounts.
///
/// Only profile columns are selected; credential columns never leave the
/// database.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &'static str, value: &str) -> Result<Option<User>, ModelError> {
        let sql = format!(
            r#"
            SELECT id, name, slug, email, image, cover, bio, website, location,
                   created_at, updated_at
            FROM users
            WHERE {column} = $1
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ModelError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, slug, email, image, cover, bio, website, location,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, ModelError> {
        self.find_one("slug", slug).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ModelError> {
        self.find_one("email", email).await
    }
}
