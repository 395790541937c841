//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures populated by the persistence layer.
//! They carry no serialization logic; the API layer maps them onto response
//! DTOs in [`crate::api::dto`].
//!
//! # Entity Types
//!
//! - [`Post`] - A post or static page
//! - [`Tag`] - A label attached to posts
//! - [`User`] - An author account
//! - [`Comment`] - A reader comment on a post

pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

pub use comment::Comment;
pub use post::Post;
pub use tag::Tag;
pub use user::User;
