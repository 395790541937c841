//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::User;

/// JSON representation of an author profile.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub email: String,
    pub image: Option<String>,
    pub cover: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            name: u.name,
            slug: u.slug,
            email: u.email,
            image: u.image,
            cover: u.cover,
            bio: u.bio,
            website: u.website,
            location: u.location,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
