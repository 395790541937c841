//! Post lookup service.

use crate::domain::entities::Post;
use crate::domain::error::ModelError;
use crate::domain::repositories::{PostFilter, PostRepository};
use std::sync::Arc;

/// Service for reading posts.
pub struct PostService<R: PostRepository + ?Sized = dyn PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository + ?Sized> PostService<R> {
    /// Creates a new post service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a post by ID, published or not.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no post has this ID.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_post_by_id(&self, id: i64) -> Result<Post, ModelError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Post not found");
            ModelError::not_found("post")
        })
    }

    /// Retrieves a post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] if no post has this slug.
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post, ModelError> {
        self.repository.find_by_slug(slug).await?.ok_or_else(|| {
            tracing::debug!(slug, "Post not found");
            ModelError::not_found("post")
        })
    }

    /// Lists published posts, pages excluded, newest publication first.
    ///
    /// An empty blog yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Database`] on database errors.
    pub async fn list_published_posts(&self) -> Result<Vec<Post>, ModelError> {
        self.repository.list(PostFilter::published()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockPostRepository, PostOrder};
    use chrono::Utc;

    fn create_test_post(id: i64, slug: &str) -> Post {
        let now = Utc::now();
        Post {
            id,
            title: format!("Post {id}"),
            slug: slug.to_string(),
            markdown: String::new(),
            html: String::new(),
            image: None,
            category: None,
            meta_description: None,
            is_featured: false,
            is_page: false,
            allow_comment: true,
            is_published: true,
            comment_count: 0,
            author_id: 1,
            created_at: now,
            updated_at: now,
            published_at: Some(now),
        }
    }

    #[tokio::test]
    async fn test_get_post_by_id_success() {
        let mut mock_repo = MockPostRepository::new();

        let post = create_test_post(7, "seven");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));

        let service = PostService::new(Arc::new(mock_repo));

        let result = service.get_post_by_id(7).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().slug, "seven");
    }

    #[tokio::test]
    async fn test_get_post_by_id_not_found() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(mock_repo));

        let result = service.get_post_by_id(404).await;

        assert!(matches!(
            result.unwrap_err(),
            ModelError::NotFound { entity: "post" }
        ));
    }

    #[tokio::test]
    async fn test_get_post_by_slug_passes_slug_through() {
        let mut mock_repo = MockPostRepository::new();

        let post = create_test_post(3, "hello-world");
        mock_repo
            .expect_find_by_slug()
            .withf(|slug| slug == "hello-world")
            .times(1)
            .returning(move |_| Ok(Some(post.clone())));

        let service = PostService::new(Arc::new(mock_repo));

        let result = service.get_post_by_slug("hello-world").await;

        assert_eq!(result.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_list_published_posts_requests_published_order() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_list()
            .withf(|filter| {
                filter.only_published
                    && !filter.include_pages
                    && filter.order == PostOrder::PublishedDesc
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = PostService::new(Arc::new(mock_repo));

        let result = service.list_published_posts().await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_published_posts_database_error() {
        let mut mock_repo = MockPostRepository::new();

        mock_repo
            .expect_list()
            .times(1)
            .returning(|_| Err(ModelError::Database(sqlx::Error::PoolTimedOut)));

        let service = PostService::new(Arc::new(mock_repo));

        let result = service.list_published_posts().await;

        assert!(matches!(result.unwrap_err(), ModelError::Database(_)));
    }
}
