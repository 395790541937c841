//! Application layer services.
//!
//! Services sit between the HTTP handlers and the repositories. They turn a
//! repository miss into [`crate::domain::error::ModelError::NotFound`] and
//! choose the listing rules the API exposes.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Post lookups and the published listing
//! - [`services::tag_service::TagService`] - Tag lookups
//! - [`services::user_service::UserService`] - Author lookups
//! - [`services::comment_service::CommentService`] - Comment lookups

pub mod services;
