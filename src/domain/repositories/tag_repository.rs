//! Repository trait for tags.

use crate::domain::entities::Tag;
use crate::domain::error::ModelError;
use async_trait::async_trait;

/// Repository interface for tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Finds a tag by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, ModelError>;

    /// Finds a tag by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, ModelError>;

    /// Lists every tag, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<Tag>, ModelError>;
}
