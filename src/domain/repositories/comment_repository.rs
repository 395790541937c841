//! Repository trait for reader comments.

use crate::domain::entities::Comment;
use crate::domain::error::ModelError;
use async_trait::async_trait;

/// Repository interface for comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Finds a comment by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ModelError>;

    /// Lists the comments on a post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, ModelError>;
}
