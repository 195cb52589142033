//! Ports for the session store, the mail transport and code generation

use async_trait::async_trait;

use crate::domain::entities::session::SessionRecord;

/// Key-value store of session records, keyed by session id
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the record for a session, `None` when absent or expired
    async fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, String>;
    /// Store a record under `record.session_id`, replacing any previous one
    async fn save(&self, record: &SessionRecord) -> Result<(), String>;
    /// Drop the record for a session
    async fn remove(&self, session_id: &str) -> Result<(), String>;
}

/// Trait for mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send a verification code by email, returning the provider message id
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Source of fresh OTP codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
