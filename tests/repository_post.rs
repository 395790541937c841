mod common;

use blog_api::domain::repositories::{PostFilter, PostOrder, PostRepository};
use blog_api::infrastructure::persistence::PgPostRepository;
use common::{days_after_base, insert_post, insert_user};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let author = insert_user(&pool, "ada", "ada@example.com").await;
    let id = insert_post(&pool, author, "hello", false, Some(days_after_base(1))).await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let post = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(post.slug, "hello");
    assert_eq!(post.author_id, author);
    assert!(post.is_published);
    assert_eq!(post.published_at, Some(days_after_base(1)));
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgPostRepository::new(Arc::new(pool));

    let result = repo.find_by_id(12345).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_slug(pool: PgPool) {
    let author = insert_user(&pool, "ada", "ada@example.com").await;
    insert_post(&pool, author, "draft", false, None).await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let post = repo.find_by_slug("draft").await.unwrap().unwrap();

    assert!(!post.is_published);
    assert!(post.published_at.is_none());
    assert!(repo.find_by_slug("nope").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_published(pool: PgPool) {
    let author = insert_user(&pool, "ada", "ada@example.com").await;
    insert_post(&pool, author, "old", false, Some(days_after_base(1))).await;
    insert_post(&pool, author, "new", false, Some(days_after_base(5))).await;
    insert_post(&pool, author, "draft", false, None).await;
    insert_post(&pool, author, "about", true, Some(days_after_base(9))).await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let posts = repo.list(PostFilter::published()).await.unwrap();

    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["new", "old"]);
}

#[sqlx::test]
async fn test_list_everything(pool: PgPool) {
    let author = insert_user(&pool, "ada", "ada@example.com").await;
    insert_post(&pool, author, "post", false, Some(days_after_base(1))).await;
    insert_post(&pool, author, "draft", false, None).await;
    insert_post(&pool, author, "about", true, Some(days_after_base(2))).await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let filter = PostFilter {
        include_pages: true,
        only_published: false,
        order: PostOrder::UpdatedDesc,
    };
    let posts = repo.list(filter).await.unwrap();

    assert_eq!(posts.len(), 3);
}

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let repo = PgPostRepository::new(Arc::new(pool));

    let posts = repo.list(PostFilter::published()).await.unwrap();

    assert!(posts.is_empty());
}
