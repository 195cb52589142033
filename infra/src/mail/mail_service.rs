//! Mail Service Interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// A rendered message ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mail transport trait
///
/// Implementations include:
/// - Brevo transactional email API
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a message, returning the provider's message id
    async fn send(&self, email: &OutgoingEmail) -> Result<String, InfrastructureError>;

    /// Name of the provider, for logs
    fn provider_name(&self) -> &str;
}

/// Render the verification message for `code`
pub fn verification_email(to: &str, code: &str, valid_minutes: i64) -> OutgoingEmail {
    let html = format!(
        r#"<div style="font-family: 'Segoe UI', Roboto, sans-serif; max-width: 480px; margin: auto; padding: 24px;">
  <h2 style="text-align: center;">Verify your email</h2>
  <p>Use the code below to finish creating your AI Morph account.</p>
  <p style="font-size: 32px; font-weight: bold; letter-spacing: 8px; text-align: center;">{code}</p>
  <p style="color: #888; font-size: 13px;">This code expires in {valid_minutes} minutes. If you did not request it, ignore this email.</p>
</div>"#
    );

    OutgoingEmail {
        to: to.to_string(),
        subject: format!("Your AI Morph verification code is {}", code),
        html,
    }
}
