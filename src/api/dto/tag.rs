//! DTOs for tag endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Tag;

/// JSON representation of a tag.
#[derive(Debug, Serialize)]
pub struct TagItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tag> for TagItem {
    fn from(t: Tag) -> Self {
        TagItem {
            id: t.id,
            name: t.name,
            slug: t.slug,
            description: t.description,
            hidden: t.hidden,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
