use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use morph_core::domain::entities::user::User;
use morph_core::services::{LoginCommand, RegisterCommand};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendOtpQuery {
    /// Address the code is mailed to
    #[serde(default)]
    #[validate(length(min = 1, max = 254, message = "Email is required."))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// Every field is optional on the wire so a missing one maps to
/// `All fields are required.` instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub otp: Option<String>,
    /// Used only when the `X-Session-Id` header is absent
    #[serde(alias = "sessionID")]
    pub session_id: Option<String>,
}

impl CreateUserRequest {
    pub fn into_command(self, session_header: Option<String>) -> RegisterCommand {
        RegisterCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            otp: self.otp,
            session_id: session_header.or(self.session_id),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginCommand {
    fn from(request: LoginRequest) -> Self {
        LoginCommand {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse<U> {
    pub message: String,
    pub token: String,
    pub user: U,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for CreatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedInUser {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for LoggedInUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}
