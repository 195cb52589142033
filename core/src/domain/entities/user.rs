//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity
///
/// Created only after the owner proved control of `email` with an OTP.
/// `password_hash` is a bcrypt hash and never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    /// Normalized (trimmed, lowercase) email address, unique across users
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Raw image bytes of the profile picture
    pub profile_picture: Option<Vec<u8>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the provided name parts, leaving `None` parts untouched
    pub fn rename(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(first) = first_name {
            self.first_name = first;
        }
        if let Some(last) = last_name {
            self.last_name = last;
        }
        self.touch();
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn set_profile_picture(&mut self, picture: Vec<u8>) {
        self.profile_picture = Some(picture);
        self.touch();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
