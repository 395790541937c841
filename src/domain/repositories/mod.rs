//! Repository trait definitions for the domain layer.
//!
//! These traits are the model layer's lookup operations. Implementations live
//! in `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Posts and pages
//! - [`TagRepository`] - Tags
//! - [`UserRepository`] - Author accounts
//! - [`CommentRepository`] - Reader comments
//!
//! Single-record lookups return `Ok(None)` on a miss. Collection lookups
//! return an empty `Vec` when nothing matches.

pub mod comment_repository;
pub mod post_repository;
pub mod tag_repository;
pub mod user_repository;

pub use comment_repository::CommentRepository;
pub use post_repository::{PostFilter, PostOrder, PostRepository};
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
