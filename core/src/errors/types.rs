//! Domain-specific error types for authentication and related operations
//!
//! The `Display` text of each variant is the message shown to API clients,
//! so it stays short and never leaks internals.

use thiserror::Error;

/// Authentication and account errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    /// Covers a wrong code, an expired code and an unknown session alike
    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid old password")]
    InvalidOldPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Failed to send OTP. Please try again later")]
    MailServiceFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Authentication token is missing")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("OTP must be 6 characters long.")]
    InvalidOtpFormat,

    #[error("{field} is required.")]
    RequiredField { field: String },

    #[error("{field} must be between {min} and {max} characters.")]
    InvalidLength { field: String, min: usize, max: usize },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("No image uploaded")]
    EmptyUpload,
}

impl ValidationError {
    /// Name of the offending field, when there is a single one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::PasswordTooShort { .. } => Some("password"),
            ValidationError::InvalidOtpFormat => Some("otp"),
            ValidationError::RequiredField { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidFormat { field } => Some(field),
            ValidationError::EmptyUpload => Some("profilePicture"),
            ValidationError::MissingFields => None,
        }
    }
}
