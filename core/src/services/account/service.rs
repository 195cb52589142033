//! Account service implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use morph_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use morph_shared::utils::validation::{has_exact_length, length_at_least};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::otp::OtpService;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AccountServiceConfig;
use super::types::{LoginCommand, ProfileUpdate, RegisterCommand};

/// Number of digits in an issued code
const OTP_LENGTH: usize = 6;

pub struct AccountService {
    user_repository: Arc<dyn UserRepository>,
    otp_service: Arc<OtpService>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
    config: AccountServiceConfig,
}

impl AccountService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        otp_service: Arc<OtpService>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Create an account after OTP verification
    pub async fn register(&self, command: RegisterCommand) -> DomainResult<AuthSession> {
        self.register_at(command, Utc::now()).await
    }

    /// Create an account, verifying the OTP as of `now`
    ///
    /// Steps:
    /// 1. Every field present and well-formed
    /// 2. Email not yet registered
    /// 3. OTP accepted for the session (one generic error for every failure)
    /// 4. Password hashed, user inserted (a concurrent duplicate insert
    ///    still ends in `UserAlreadyExists`)
    /// 5. Access token issued
    pub async fn register_at(
        &self,
        command: RegisterCommand,
        now: DateTime<Utc>,
    ) -> DomainResult<AuthSession> {
        let (Some(first_name), Some(last_name), Some(email), Some(password), Some(otp), Some(session_id)) = (
            present(&command.first_name),
            present(&command.last_name),
            present(&command.email),
            present(&command.password),
            present(&command.otp),
            present(&command.session_id),
        ) else {
            return Err(ValidationError::MissingFields.into());
        };

        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.check_password_length(password)?;
        if !has_exact_length(otp.trim(), OTP_LENGTH) {
            return Err(ValidationError::InvalidOtpFormat.into());
        }

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let verified = if self.config.require_email_binding {
            self.otp_service
                .verify_code_for_email_at(otp, session_id, &email, now)
                .await?
        } else {
            self.otp_service.verify_code_at(otp, session_id, now).await?
        };
        if !verified {
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let user = self
            .user_repository
            .create(User::new(first_name.trim(), last_name.trim(), email, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "user_registered",
            "Created user account"
        );

        self.issue_session(user)
    }

    /// Email and password login
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<AuthSession> {
        let (Some(email), Some(password)) = (present(&command.email), present(&command.password)) else {
            return Err(ValidationError::MissingFields.into());
        };

        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.check_password_length(password)?;

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            tracing::warn!(email = %mask_email(&email), event = "login_failed", reason = "unknown_email", "Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.password_hasher.verify(password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, event = "login_failed", reason = "bad_password", "Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, event = "login_success", "User logged in");
        self.issue_session(user)
    }

    pub async fn get_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Apply a partial profile update
    ///
    /// An `old_password` is checked whenever it is supplied, and it is
    /// mandatory for a password change.
    pub async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        let mut user = self.get_user(user_id).await?;

        let new_password = present(&update.password);
        let old_password = present(&update.old_password);

        if let Some(new_password) = new_password {
            self.check_password_length(new_password)?;
            if old_password.is_none() {
                return Err(ValidationError::RequiredField {
                    field: "oldPassword".to_string(),
                }
                .into());
            }
        }

        if let Some(old_password) = old_password {
            if !self.password_hasher.verify(old_password, &user.password_hash).await? {
                tracing::warn!(user_id = %user.id, event = "profile_update_rejected", "Old password mismatch");
                return Err(AuthError::InvalidOldPassword.into());
            }
        }

        let first_name = present(&update.first_name).map(|s| s.trim().to_string());
        let last_name = present(&update.last_name).map(|s| s.trim().to_string());
        if first_name.is_some() || last_name.is_some() {
            user.rename(first_name, last_name);
        }

        if let Some(new_password) = new_password {
            let hash = self.password_hasher.hash(new_password).await?;
            user.set_password_hash(hash);
        }

        if let Some(picture) = update.profile_picture.filter(|bytes| !bytes.is_empty()) {
            user.set_profile_picture(picture);
        }

        let user = self.user_repository.update(user).await?;
        tracing::info!(user_id = %user.id, event = "profile_updated", "Profile updated");
        Ok(user)
    }

    /// Replace the profile picture
    pub async fn upload_profile_picture(&self, user_id: Uuid, picture: Vec<u8>) -> DomainResult<User> {
        if picture.is_empty() {
            return Err(ValidationError::EmptyUpload.into());
        }

        let mut user = self.get_user(user_id).await?;
        let size = picture.len();
        user.set_profile_picture(picture);
        let user = self.user_repository.update(user).await?;

        tracing::info!(user_id = %user.id, bytes = size, event = "profile_picture_uploaded", "Profile picture stored");
        Ok(user)
    }

    fn check_password_length(&self, password: &str) -> DomainResult<()> {
        if !length_at_least(password, self.config.password_min_length) {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.password_min_length,
            }
            .into());
        }
        Ok(())
    }

    fn issue_session(&self, user: User) -> DomainResult<AuthSession> {
        let token = self.token_service.generate_access_token(&user)?;
        Ok(AuthSession::new(token, self.token_service.access_token_expiry(), user))
    }
}

/// The value when it is set and not blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
