//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! bind every value as a parameter and decode rows through `FromRow` structs
//! private to each repository.
//!
//! # Repositories
//!
//! - [`PgPostRepository`] - Posts and pages
//! - [`PgTagRepository`] - Tags
//! - [`PgUserRepository`] - Author accounts
//! - [`PgCommentRepository`] - Reader comments

pub mod pg_comment_repository;
pub mod pg_post_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_comment_repository::PgCommentRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
