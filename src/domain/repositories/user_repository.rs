//! Repository trait for author accounts.

use crate::domain::entities::User;
use crate::domain::error::ModelError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by database ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ModelError>;

    /// Finds a user by profile slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<User>, ModelError>;

    /// Finds a user by email address. Matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ModelError>;
}
