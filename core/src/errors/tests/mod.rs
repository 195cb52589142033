//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_client_facing_messages() {
    assert_eq!(ValidationError::MissingFields.to_string(), "All fields are required.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format.");
    assert_eq!(
        ValidationError::PasswordTooShort { min: 6 }.to_string(),
        "Password must be at least 6 characters long."
    );
    assert_eq!(AuthError::InvalidOrExpiredOtp.to_string(), "Invalid or expired OTP");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
}

#[test]
fn test_bridges_are_transparent() {
    let error: DomainError = AuthError::UserAlreadyExists.into();
    assert_eq!(error.to_string(), "User already exists");

    let error: DomainError = TokenError::TokenExpired.into();
    assert!(matches!(error, DomainError::Token(TokenError::TokenExpired)));

    let error: DomainError = ValidationError::InvalidOtpFormat.into();
    assert_eq!(error.to_string(), "OTP must be 6 characters long.");
}

#[test]
fn test_validation_error_field() {
    assert_eq!(ValidationError::InvalidEmail.field(), Some("email"));
    assert_eq!(
        ValidationError::RequiredField { field: "prompt".to_string() }.field(),
        Some("prompt")
    );
    assert_eq!(ValidationError::MissingFields.field(), None);
}

#[test]
fn test_helper_constructors() {
    let error = DomainError::not_found("Post");
    assert!(matches!(error, DomainError::NotFound { ref resource } if resource == "Post"));

    let error = DomainError::internal("pool closed");
    assert_eq!(error.to_string(), "Internal error: pool closed");
}
