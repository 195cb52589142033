//! Main OTP service implementation

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use morph_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::session::SessionRecord;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

use super::config::OtpServiceConfig;
use super::generator::SecureCodeGenerator;
use super::traits::{CodeGenerator, MailServiceTrait, SessionStore};
use super::types::IssueCodeResult;

/// Longest client-supplied session id that is reused as-is
const MAX_SESSION_ID_LEN: usize = 128;

/// Issues and verifies email OTP codes bound to session records
pub struct OtpService {
    /// Used to refuse codes for addresses that already have an account
    user_repository: Arc<dyn UserRepository>,
    /// Holds the session records
    session_store: Arc<dyn SessionStore>,
    /// Mail transport for delivering codes
    mail_service: Arc<dyn MailServiceTrait>,
    code_generator: Arc<dyn CodeGenerator>,
    config: OtpServiceConfig,
}

impl OtpService {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Lookup for existing accounts
    /// * `session_store` - Session record storage
    /// * `mail_service` - Mail transport implementation
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        session_store: Arc<dyn SessionStore>,
        mail_service: Arc<dyn MailServiceTrait>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            session_store,
            mail_service,
            code_generator: Arc::new(SecureCodeGenerator),
            config,
        }
    }

    /// Replace the code source
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a code for `email` into the caller's session
    ///
    /// See [`OtpService::issue_code_at`].
    pub async fn issue_code(
        &self,
        email: &str,
        session_id: Option<&str>,
    ) -> DomainResult<IssueCodeResult> {
        self.issue_code_at(email, session_id, Utc::now()).await
    }

    /// Issue a code as of `now`
    ///
    /// This method:
    /// 1. Validates the email format
    /// 2. Refuses addresses that already belong to an account
    /// 3. Generates a 6-digit code
    /// 4. Writes the session record, replacing any earlier code
    /// 5. Mails the code
    ///
    /// When `session_id` is absent or unusable a new one is minted.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueCodeResult)` - Session id, expiry and provider message id
    /// * `Err(DomainError)` - Validation, conflict, store or mail failure
    pub async fn issue_code_at(
        &self,
        email: &str,
        session_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<IssueCodeResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if self.user_repository.exists_by_email(&email).await? {
            tracing::warn!(
                email = %mask_email(&email),
                event = "otp_rejected_existing_user",
                "OTP requested for an email that already has an account"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let session_id = session_id
            .and_then(usable_session_id)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let code = self.code_generator.generate();
        let record = SessionRecord::issue(
            session_id.clone(),
            code.clone(),
            email.clone(),
            now,
            Duration::minutes(self.config.code_expiration_minutes),
        );

        self.session_store.save(&record).await.map_err(|e| {
            tracing::error!(
                session_id = %session_id,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store session record"
            );
            DomainError::Internal {
                message: format!("Failed to store session record: {}", e),
            }
        })?;

        tracing::info!(
            email = %mask_email(&email),
            session_id = %session_id,
            expires_at = %record.otp_expiration_time,
            event = "otp_issued",
            "Issued verification code"
        );

        let message_id = self
            .mail_service
            .send_verification_code(&email, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "otp_mail_failed",
                    "Failed to send verification email"
                );
                AuthError::MailServiceFailure
            })?;

        Ok(IssueCodeResult {
            session_id,
            expires_at: record.otp_expiration_time,
            message_id,
        })
    }

    /// Check `code` against the session record as of now
    pub async fn verify_code(&self, code: &str, session_id: &str) -> DomainResult<bool> {
        self.verify_code_at(code, session_id, Utc::now()).await
    }

    /// Check `code` against the session record as of `now`
    ///
    /// Valid only when a record exists, its code numerically equals `code`,
    /// and `now` is strictly before its expiry. A missing record is `Ok(false)`.
    /// A store failure is an error, not a rejection.
    pub async fn verify_code_at(
        &self,
        code: &str,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        self.check(code, session_id, None, now).await
    }

    /// Like [`OtpService::verify_code_at`], additionally requiring that the
    /// code was issued for `email`
    pub async fn verify_code_for_email_at(
        &self,
        code: &str,
        session_id: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        self.check(code, session_id, Some(email), now).await
    }

    async fn check(
        &self,
        code: &str,
        session_id: &str,
        email: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let record = self.session_store.load(session_id).await.map_err(|e| {
            tracing::error!(
                session_id = %session_id,
                error = %e,
                event = "otp_verification_error",
                "Failed to read session record"
            );
            DomainError::Internal {
                message: format!("Failed to read session record: {}", e),
            }
        })?;

        let Some(record) = record else {
            tracing::debug!(session_id = %session_id, event = "otp_session_missing", "No session record");
            return Ok(false);
        };

        let accepted = record.accepts(code, now);
        let bound = email.map(|e| record.is_bound_to(e)).unwrap_or(true);
        let valid = accepted && bound;

        if valid {
            tracing::info!(session_id = %session_id, event = "otp_verified_success", "Verification code accepted");
            if self.config.single_use {
                self.session_store.remove(session_id).await.map_err(|e| DomainError::Internal {
                    message: format!("Failed to clear session record: {}", e),
                })?;
            }
        } else {
            tracing::warn!(
                session_id = %session_id,
                expired = record.is_expired_at(now),
                email_mismatch = !bound,
                event = "otp_verification_failed",
                "Verification code rejected"
            );
        }

        Ok(valid)
    }
}

/// Reuse a client session id only when it is a plain token
fn usable_session_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let plain = !trimmed.is_empty()
        && trimmed.len() <= MAX_SESSION_ID_LEN
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    plain.then(|| trimmed.to_string())
}
