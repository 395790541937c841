//! Repository trait for posts.

use crate::domain::entities::Post;
use crate::domain::error::ModelError;
use async_trait::async_trait;

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    /// Newest publication first; unpublished rows last.
    #[default]
    PublishedDesc,
    /// Most recently edited first.
    UpdatedDesc,
}

/// Selection and ordering for [`PostRepository::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostFilter {
    pub include_pages: bool,
    pub only_published: bool,
    pub order: PostOrder,
}

impl PostFilter {
    /// Published posts, pages excluded, newest publication first.
    pub fn published() -> Self {
        Self {
            include_pages: false,
            only_published: true,
            order: PostOrder::PublishedDesc,
        }
    }
}

/// Repository interface for posts and pages.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Finds a post by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ModelError>;

    /// Finds a post by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, ModelError>;

    /// Lists posts matching `filter` in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, ModelError>;
}
