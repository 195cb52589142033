//! Input types for account operations
//!
//! Fields are optional so that a missing field is reported by the service
//! with its own message instead of failing deserialization.

/// Registration request
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub otp: Option<String>,
    pub session_id: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial profile update; `None` fields stay unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Required when `password` is set
    pub old_password: Option<String>,
    pub password: Option<String>,
    pub profile_picture: Option<Vec<u8>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
            && self.profile_picture.is_none()
    }
}
