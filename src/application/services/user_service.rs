//! Author lookup service.

use crate::domain::entities::User;
use crate::domain::error::ModelError;
use crate::domain::repositories::UserRepository;
use std::sync::Arc;

/// Service for reading author profiles.
pub struct UserService<R: UserRepository + ?Sized = dyn UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no user has this ID.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ModelError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(id, "User not found");
                ModelError::not_found("user")
            })
    }

    /// Retrieves a user by profile slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no user has this slug.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_user_by_slug(&self, slug: &str) -> Result<User, ModelError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                tracing::debug!(slug, "User not found");
                ModelError::not_found("user")
            })
    }

    /// Retrieves a user by email address.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no user has this email.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, ModelError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                tracing::debug!(email, "User not found");
                ModelError::not_found("user")
            })
    }
}
