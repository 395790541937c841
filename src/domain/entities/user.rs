//! User entity.

use chrono::{DateTime, Utc};

/// An author account.
///
/// Only public profile data lives here; credentials stay in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
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
