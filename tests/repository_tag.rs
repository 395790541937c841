mod common;

use blog_api::domain::repositories::TagRepository;
use blog_api::infrastructure::persistence::PgTagRepository;
use common::insert_tag;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_id_and_slug(pool: PgPool) {
    let id = insert_tag(&pool, "Rust", "rust").await;
    let repo = PgTagRepository::new(Arc::new(pool));

    let by_id = repo.find_by_id(id).await.unwrap().unwrap();
    let by_slug = repo.find_by_slug("rust").await.unwrap().unwrap();

    assert_eq!(by_id, by_slug);
    assert_eq!(by_id.name, "Rust");
    assert!(!by_id.hidden);
}

#[sqlx::test]
async fn test_missing_tag(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(1).await.unwrap().is_none());
    assert!(repo.find_by_slug("unknown-slug").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_sorted_by_name(pool: PgPool) {
    insert_tag(&pool, "Zig", "zig").await;
    insert_tag(&pool, "Ada", "ada").await;
    insert_tag(&pool, "Go", "go").await;
    let repo = PgTagRepository::new(Arc::new(pool));

    let tags = repo.list().await.unwrap();

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Go", "Zig"]);
}
