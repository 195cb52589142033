//! Bridge from a mail transport to the core `MailServiceTrait`

use async_trait::async_trait;

use morph_core::services::otp::MailServiceTrait;

use super::mail_service::{verification_email, MailService};

pub struct MailServiceAdapter {
    inner: Box<dyn MailService>,
    code_valid_minutes: i64,
}

impl MailServiceAdapter {
    /// `code_valid_minutes` is quoted in the message body
    pub fn new(inner: Box<dyn MailService>, code_valid_minutes: i64) -> Self {
        Self {
            inner,
            code_valid_minutes,
        }
    }
}

#[async_trait]
impl MailServiceTrait for MailServiceAdapter {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let message = verification_email(email, code, self.code_valid_minutes);
        self.inner.send(&message).await.map_err(|e| e.to_string())
    }
}
