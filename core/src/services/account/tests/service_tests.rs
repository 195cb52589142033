use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::account::{
    AccountService, AccountServiceConfig, LoginCommand, ProfileUpdate, RegisterCommand,
};
use crate::services::otp::tests::mocks::{MockMailService, MockSessionStore};
use crate::services::otp::{FixedCodeGenerator, OtpService, OtpServiceConfig};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    accounts: Arc<AccountService>,
    otp: Arc<OtpService>,
    users: Arc<MockUserRepository>,
    tokens: Arc<TokenService>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let otp = Arc::new(
        OtpService::new(
            users.clone(),
            Arc::new(MockSessionStore::new(false)),
            Arc::new(MockMailService::new(false)),
            OtpServiceConfig::default(),
        )
        .with_code_generator(Arc::new(FixedCodeGenerator::new("123456"))),
    );
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        otp.clone(),
        tokens.clone(),
        PasswordHasher::new(4),
        AccountServiceConfig::default(),
    ));
    Fixture {
        accounts,
        otp,
        users,
        tokens,
    }
}

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn command(email: &str, session_id: &str) -> RegisterCommand {
    RegisterCommand {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some(email.to_string()),
        password: Some("secret123".to_string()),
        otp: Some("123456".to_string()),
        session_id: Some(session_id.to_string()),
    }
}

async fn issued_session(f: &Fixture, email: &str) -> String {
    f.otp.issue_code_at(email, None, t0()).await.unwrap().session_id
}

#[tokio::test]
async fn test_register_success_issues_token() {
    let f = fixture();
    let session = issued_session(&f, "a@x.com").await;

    let auth = f
        .accounts
        .register_at(command("a@x.com", &session), t0() + Duration::minutes(1))
        .await
        .unwrap();

    assert_eq!(auth.user.email, "a@x.com");
    assert_ne!(auth.user.password_hash, "secret123");
    let claims = f.tokens.verify_access_token(&auth.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), auth.user.id);
    assert_eq!(auth.expires_in, 3600);
    assert_eq!(f.users.count().await, 1);
}

#[tokio::test]
async fn test_register_missing_field() {
    let f = fixture();
    let mut cmd = command("a@x.com", "S");
    cmd.last_name = None;

    let result = f.accounts.register_at(cmd, t0()).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::MissingFields))
    ));

    let mut cmd = command("a@x.com", "S");
    cmd.session_id = Some("  ".to_string());
    let result = f.accounts.register_at(cmd, t0()).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::MissingFields))
    ));
}

#[tokio::test]
async fn test_register_field_validation() {
    let f = fixture();

    let result = f.accounts.register_at(command("bad-email", "S"), t0()).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let mut cmd = command("a@x.com", "S");
    cmd.password = Some("12345".to_string());
    let result = f.accounts.register_at(cmd, t0()).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::PasswordTooShort { min: 6 }))
    ));

    let mut cmd = command("a@x.com", "S");
    cmd.otp = Some("12345".to_string());
    let result = f.accounts.register_at(cmd, t0()).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidOtpFormat))
    ));
}

#[tokio::test]
async fn test_register_failures_share_one_error() {
    let f = fixture();
    let session = issued_session(&f, "a@x.com").await;

    // wrong code
    let mut cmd = command("a@x.com", &session);
    cmd.otp = Some("654321".to_string());
    let wrong = f.accounts.register_at(cmd, t0() + Duration::minutes(1)).await;

    // expired
    let expired = f
        .accounts
        .register_at(command("a@x.com", &session), t0() + Duration::minutes(11))
        .await;

    // unknown session
    let unknown = f
        .accounts
        .register_at(command("a@x.com", "no-such-session"), t0() + Duration::minutes(1))
        .await;

    // code issued for another address
    let other = f
        .accounts
        .register_at(command("b@x.com", &session), t0() + Duration::minutes(1))
        .await;

    // right length, not a number
    let mut cmd = command("a@x.com", &session);
    cmd.otp = Some("12a456".to_string());
    let garbled = f.accounts.register_at(cmd, t0() + Duration::minutes(1)).await;

    for result in [wrong, expired, unknown, other, garbled] {
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp))
        ));
    }
    assert_eq!(f.users.count().await, 0);
}

#[tokio::test]
async fn test_register_existing_email_is_conflict() {
    let f = fixture();
    let session = issued_session(&f, "a@x.com").await;
    f.users
        .create(User::new("Someone", "Else", "a@x.com", "hash"))
        .await
        .unwrap();

    let result = f
        .accounts
        .register_at(command("a@x.com", &session), t0() + Duration::minutes(1))
        .await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserAlreadyExists))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_registration_at_most_one_succeeds() {
    let f = fixture();
    let first = issued_session(&f, "race@x.com").await;
    let second = issued_session(&f, "race@x.com").await;
    assert_ne!(first, second);

    let at = t0() + Duration::minutes(1);
    let a = {
        let accounts = f.accounts.clone();
        tokio::spawn(async move { accounts.register_at(command("race@x.com", &first), at).await })
    };
    let b = {
        let accounts = f.accounts.clone();
        tokio::spawn(async move { accounts.register_at(command("race@x.com", &second), at).await })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(DomainError::Auth(AuthError::UserAlreadyExists)))));
    assert_eq!(f.users.count().await, 1);
}

#[tokio::test]
async fn test_login() {
    let f = fixture();
    let session = issued_session(&f, "a@x.com").await;
    f.accounts
        .register_at(command("a@x.com", &session), t0() + Duration::minutes(1))
        .await
        .unwrap();

    let auth = f
        .accounts
        .login(LoginCommand {
            email: Some("A@X.com".to_string()),
            password: Some("secret123".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(auth.user.email, "a@x.com");

    for (email, password) in [("a@x.com", "wrong-password"), ("nobody@x.com", "secret123")] {
        let result = f
            .accounts
            .login(LoginCommand {
                email: Some(email.to_string()),
                password: Some(password.to_string()),
            })
            .await;
        assert!(matches!(result, Err(DomainError::Auth(AuthError::InvalidCredentials))));
    }
}

#[tokio::test]
async fn test_login_validation() {
    let f = fixture();
    let result = f
        .accounts
        .login(LoginCommand {
            email: Some("a@x.com".to_string()),
            password: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::MissingFields))
    ));
}

async fn registered(f: &Fixture) -> User {
    let session = issued_session(f, "a@x.com").await;
    f.accounts
        .register_at(command("a@x.com", &session), t0() + Duration::minutes(1))
        .await
        .unwrap()
        .user
}

#[tokio::test]
async fn test_update_profile_names_and_picture() {
    let f = fixture();
    let user = registered(&f).await;

    let updated = f
        .accounts
        .update_profile(
            user.id,
            ProfileUpdate {
                first_name: Some(" Augusta ".to_string()),
                profile_picture: Some(vec![1, 2, 3]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, "Lovelace");
    assert_eq!(updated.profile_picture, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_password_change_requires_correct_old_password() {
    let f = fixture();
    let user = registered(&f).await;

    let missing_old = f
        .accounts
        .update_profile(
            user.id,
            ProfileUpdate {
                password: Some("newsecret".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        missing_old,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    let wrong_old = f
        .accounts
        .update_profile(
            user.id,
            ProfileUpdate {
                old_password: Some("not-it".to_string()),
                password: Some("newsecret".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(wrong_old, Err(DomainError::Auth(AuthError::InvalidOldPassword))));

    f.accounts
        .update_profile(
            user.id,
            ProfileUpdate {
                old_password: Some("secret123".to_string()),
                password: Some("newsecret".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let relogin = f
        .accounts
        .login(LoginCommand {
            email: Some("a@x.com".to_string()),
            password: Some("newsecret".to_string()),
        })
        .await;
    assert!(relogin.is_ok());
}

#[tokio::test]
async fn test_upload_profile_picture() {
    let f = fixture();
    let user = registered(&f).await;

    let empty = f.accounts.upload_profile_picture(user.id, Vec::new()).await;
    assert!(matches!(
        empty,
        Err(DomainError::ValidationErr(ValidationError::EmptyUpload))
    ));

    let updated = f
        .accounts
        .upload_profile_picture(user.id, vec![0xff, 0xd8, 0xff])
        .await
        .unwrap();
    assert_eq!(updated.profile_picture, Some(vec![0xff, 0xd8, 0xff]));
}

#[tokio::test]
async fn test_unknown_user() {
    let f = fixture();
    let result = f.accounts.get_user(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserNotFound))));
}
