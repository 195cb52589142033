use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use morph_core::domain::entities::user::User;

/// Public view of a user; the password hash never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `data:image/png;base64,...`, or null when no picture is stored
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            profile_picture: user
                .profile_picture
                .as_deref()
                .filter(|bytes| !bytes.is_empty())
                .map(|bytes| format!("data:image/png;base64,{}", STANDARD.encode(bytes))),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserDto,
}

impl ProfileResponse {
    pub fn new(user: &User) -> Self {
        Self {
            success: true,
            user: UserDto::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_hides_hash_and_encodes_picture() {
        let mut user = User::new("Ada", "Lovelace", "ada@example.com", "$2b$12$secret");
        let json = serde_json::to_value(UserDto::from(&user)).unwrap();
        assert!(json["profilePicture"].is_null());
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("$2b$12$secret"));

        user.set_profile_picture(vec![0x89, 0x50, 0x4e, 0x47]);
        let json = serde_json::to_value(UserDto::from(&user)).unwrap();
        assert_eq!(json["profilePicture"], "data:image/png;base64,iVBORw==");
        assert_eq!(json["firstName"], "Ada");
    }
}
