use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret-key-that-is-long-enough".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_generate_and_verify() {
    let service = service();
    let user = User::new("Ada", "Lovelace", "ada@example.com", "hash");

    let token = service.generate_access_token(&user).unwrap();
    let claims = service.verify_access_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.exp - claims.iat, service.access_token_expiry());
}

#[test]
fn test_expired_token_is_rejected() {
    let service = service();
    let claims = Claims::new_access_token(Uuid::new_v4(), "a@x.com", -3600, "ai-morph", "ai-morph-api");
    let token = service.encode_jwt(&claims).unwrap();

    let result = service.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let user = User::new("Ada", "Lovelace", "ada@example.com", "hash");
    let token = service().generate_access_token(&user).unwrap();

    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "a-completely-different-signing-key".to_string(),
        ..Default::default()
    });
    let result = other.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidSignature))));
}

#[test]
fn test_wrong_audience_is_rejected() {
    let service = service();
    let claims = Claims::new_access_token(Uuid::new_v4(), "a@x.com", 3600, "ai-morph", "someone-else");
    let token = service.encode_jwt(&claims).unwrap();

    let result = service.verify_access_token(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidClaims))));
}

#[test]
fn test_garbage_token() {
    let result = service().verify_access_token("not.a.jwt");
    assert!(matches!(result, Err(DomainError::Token(_))));
}
