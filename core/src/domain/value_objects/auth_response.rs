//! Result of a successful registration or login.

use crate::domain::entities::user::User;

/// Signed token plus the user it was issued for
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    /// JWT access token for API authentication
    pub token: String,

    /// Token lifetime in seconds, reused as the cookie max-age
    pub expires_in: i64,

    pub user: User,
}

impl AuthSession {
    pub fn new(token: String, expires_in: i64, user: User) -> Self {
        Self {
            token,
            expires_in,
            user,
        }
    }
}
