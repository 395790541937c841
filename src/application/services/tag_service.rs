//! Tag lookup service.

use crate::domain::entities::Tag;
use crate::domain::error::ModelError;
use crate::domain::repositories::TagRepository;
use std::sync::Arc;

/// Service for reading tags.
pub struct TagService<R: TagRepository + ?Sized = dyn TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository + ?Sized> TagService<R> {
    /// Creates a new tag service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a tag by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no tag has this ID.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_tag_by_id(&self, id: i64) -> Result<Tag, ModelError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Tag not found");
            ModelError::not_found("tag")
        })
    }

    /// Retrieves a tag by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no tag has this slug.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_tag_by_slug(&self, slug: &str) -> Result<Tag, ModelError> {
        self.repository.find_by_slug(slug).await?.ok_or_else(|| {
            tracing::debug!(slug, "Tag not found");
            ModelError::not_found("tag")
        })
    }

    /// Lists every tag, hidden ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ModelError> {
        self.repository.list().await
    }
}
