use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use morph_core::domain::entities::post::Post;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    /// `data:<mime>;base64,...`
    pub photo: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    pub name: Option<String>,
    pub prompt: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetPostQuery {
    /// Owner's user id
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub name: String,
    pub prompt: String,
    pub photo: String,
    pub admin: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            name: post.name,
            prompt: post.prompt,
            photo: post.photo,
            admin: post.admin,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
