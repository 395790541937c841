#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use blog_api::domain::entities::{Comment, Post, Tag, User};
use blog_api::domain::error::ModelError;
use blog_api::domain::repositories::{
    CommentRepository, PostFilter, PostOrder, PostRepository, TagRepository, UserRepository,
};
use blog_api::error::StatusMode;
use blog_api::routes::router;
use blog_api::state::{AppState, Repositories};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

// ─── In-memory store ─────────────────────────────────────────────────────────

/// Repository implementation backed by plain vectors.
///
/// With `unavailable` set every lookup fails like a dead connection pool.
#[derive(Default)]
pub struct FixtureStore {
    pub posts: Vec<Post>,
    pub tags: Vec<Tag>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
    pub unavailable: bool,
}

impl FixtureStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn online(&self) -> Result<(), ModelError> {
        if self.unavailable {
            Err(ModelError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostRepository for FixtureStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ModelError> {
        self.online()?;
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, ModelError> {
        self.online()?;
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, ModelError> {
        self.online()?;
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| filter.include_pages || !p.is_page)
            .filter(|p| !filter.only_published || p.is_published)
            .cloned()
            .collect();

        match filter.order {
            PostOrder::PublishedDesc => posts.sort_by(|a, b| {
                b.published_at
                    .cmp(&a.published_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
            PostOrder::UpdatedDesc => posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }

        Ok(posts)
    }
}

#[async_trait]
impl TagRepository for FixtureStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, ModelError> {
        self.online()?;
        Ok(self.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, ModelError> {
        self.online()?;
        Ok(self.tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<Tag>, ModelError> {
        self.online()?;
        let mut tags = self.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[async_trait]
impl UserRepository for FixtureStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ModelError> {
        self.online()?;
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, ModelError> {
        self.online()?;
        Ok(self.users.iter().find(|u| u.slug == slug).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ModelError> {
        self.online()?;
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl CommentRepository for FixtureStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ModelError> {
        self.online()?;
        Ok(self.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, ModelError> {
        self.online()?;
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }
}

// ─── State and server ────────────────────────────────────────────────────────

pub fn repositories(store: FixtureStore) -> Repositories {
    let store = Arc::new(store);
    Repositories {
        posts: store.clone(),
        tags: store.clone(),
        users: store.clone(),
        comments: store,
    }
}

pub fn create_test_state(store: FixtureStore, mode: StatusMode) -> AppState {
    AppState::new(repositories(store), mode)
}

pub fn make_server(store: FixtureStore) -> TestServer {
    make_server_with_mode(store, StatusMode::Legacy)
}

pub fn make_server_with_mode(store: FixtureStore, mode: StatusMode) -> TestServer {
    TestServer::new(router(create_test_state(store, mode))).unwrap()
}

// ─── Entity builders ─────────────────────────────────────────────────────────

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn days_after_base(days: i64) -> DateTime<Utc> {
    base_time() + Duration::days(days)
}

pub fn published_post(id: i64, slug: &str, published_at: DateTime<Utc>) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        slug: slug.to_string(),
        markdown: format!("# Post {id}"),
        html: format!("<h1>Post {id}</h1>"),
        image: None,
        category: None,
        meta_description: None,
        is_featured: false,
        is_page: false,
        allow_comment: true,
        is_published: true,
        comment_count: 0,
        author_id: 1,
        created_at: base_time(),
        updated_at: published_at,
        published_at: Some(published_at),
    }
}

pub fn draft_post(id: i64, slug: &str) -> Post {
    Post {
        is_published: false,
        published_at: None,
        ..published_post(id, slug, base_time())
    }
}

pub fn page(id: i64, slug: &str, published_at: DateTime<Utc>) -> Post {
    Post {
        is_page: true,
        ..published_post(id, slug, published_at)
    }
}

pub fn tag(id: i64, name: &str, slug: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        hidden: false,
        created_at: base_time(),
        updated_at: base_time(),
    }
}

pub fn user(id: i64, slug: &str, email: &str) -> User {
    User {
        id,
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        email: email.to_string(),
        image: None,
        cover: None,
        bio: None,
        website: None,
        location: None,
        created_at: base_time(),
        updated_at: base_time(),
    }
}

pub fn comment(id: i64, post_id: i64, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id,
        post_id,
        parent_id: None,
        author: "Reader".to_string(),
        author_email: "reader@example.com".to_string(),
        author_url: None,
        content: format!("Comment {id}"),
        approved: true,
        created_at,
    }
}

// ─── PostgreSQL seeding ──────────────────────────────────────────────────────

pub async fn insert_user(pool: &PgPool, slug: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, slug, email) VALUES ($1, $2, $3) RETURNING id")
        .bind(slug.to_uppercase())
        .bind(slug)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_post(
    pool: &PgPool,
    author_id: i64,
    slug: &str,
    is_page: bool,
    published_at: Option<DateTime<Utc>>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO posts (title, slug, author_id, is_page, is_published, published_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(slug.to_uppercase())
    .bind(slug)
    .bind(author_id)
    .bind(is_page)
    .bind(published_at.is_some())
    .bind(published_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_tag(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_comment(
    pool: &PgPool,
    post_id: i64,
    content: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO comments (post_id, author, author_email, content, created_at)
        VALUES ($1, 'Reader', 'reader@example.com', $2, $3)
        RETURNING id
        "#,
    )
    .bind(post_id)
    .bind(content)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}
