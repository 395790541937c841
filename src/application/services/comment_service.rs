//! Comment lookup service.

use crate::domain::entities::Comment;
use crate::domain::error::ModelError;
use crate::domain::repositories::{CommentRepository, PostRepository};
use std::sync::Arc;

/// Service for reading comments.
///
/// Needs the post repository to tell "unknown post" apart from "post without
/// comments".
pub struct CommentService<
    C: CommentRepository + ?Sized = dyn CommentRepository,
    P: PostRepository + ?Sized = dyn PostRepository,
> {
    repository: Arc<C>,
    post_repository: Arc<P>,
}

impl<C: CommentRepository + ?Sized, P: PostRepository + ?Sized> CommentService<C, P> {
    /// Creates a new comment service.
    pub fn new(repository: Arc<C>, post_repository: Arc<P>) -> Self {
        Self {
            repository,
            post_repository,
        }
    }

    /// Retrieves a comment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no comment has this ID.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_comment_by_id(&self, id: i64) -> Result<Comment, ModelError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Comment not found");
            ModelError::not_found("comment")
        })
    }

    /// Lists the comments on a post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if the post does not exist.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>, ModelError> {
        if self.post_repository.find_by_id(post_id).await?.is_none() {
            tracing::debug!(post_id, "Comments requested for unknown post");
            return Err(ModelError::not_found("post"));
        }

        self.repository.list_by_post(post_id).await
    }
}
