//! Shared application state handed to every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CommentService, PostService, TagService, UserService};
use crate::domain::repositories::{
    CommentRepository, PostRepository, TagRepository, UserRepository,
};
use crate::error::StatusMode;
use crate::infrastructure::persistence::{
    PgCommentRepository, PgPostRepository, PgTagRepository, PgUserRepository,
};

/// The model layer the services read from.
///
/// Passed explicitly to [`AppState::new`], so tests can swap in any
/// implementation of the repository traits.
#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub users: Arc<dyn UserRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            posts: Arc::new(PgPostRepository::new(pool.clone())),
            tags: Arc::new(PgTagRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool)),
        }
    }
}

/// Services and settings shared by all handlers.
///
/// Cloning is cheap; every field is reference counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub tag_service: Arc<TagService>,
    pub user_service: Arc<UserService>,
    pub comment_service: Arc<CommentService>,
    pub status_mode: StatusMode,
}

impl AppState {
    pub fn new(repositories: Repositories, status_mode: StatusMode) -> Self {
        Self {
            post_service: Arc::new(PostService::new(repositories.posts.clone())),
            tag_service: Arc::new(TagService::new(repositories.tags)),
            user_service: Arc::new(UserService::new(repositories.users)),
            comment_service: Arc::new(CommentService::new(
                repositories.comments,
                repositories.posts,
            )),
            status_mode,
        }
    }
}
