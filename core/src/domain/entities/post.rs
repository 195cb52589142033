//! Post entity: a generated image shared to the gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,

    /// Display name of the author at the time of posting
    pub name: String,

    /// Prompt the image was generated from
    pub prompt: String,

    /// `data:<mime>;base64,...` URI of the image
    pub photo: String,

    /// Owning user
    pub admin: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        photo: impl Into<String>,
        admin: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prompt: prompt.into(),
            photo: photo.into(),
            admin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this post belongs to `user_id`
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.admin == user_id
    }
}
