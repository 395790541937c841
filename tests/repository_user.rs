mod common;

use blog_api::domain::repositories::UserRepository;
use blog_api::infrastructure::persistence::PgUserRepository;
use common::insert_user;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = insert_user(&pool, "grace", "grace@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(user.name, "GRACE");
    assert_eq!(user.email, "grace@example.com");
}

#[sqlx::test]
async fn test_find_by_slug_and_email(pool: PgPool) {
    let id = insert_user(&pool, "grace", "grace@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let by_slug = repo.find_by_slug("grace").await.unwrap().unwrap();
    let by_email = repo.find_by_email("grace@example.com").await.unwrap().unwrap();

    assert_eq!(by_slug.id, id);
    assert_eq!(by_email.id, id);
}

#[sqlx::test]
async fn test_missing_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(7).await.unwrap().is_none());
    assert!(repo.find_by_slug("nobody").await.unwrap().is_none());
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}
