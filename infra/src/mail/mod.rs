//! Mail Service Module
//!
//! Transports for the verification email sent during registration.
//!
//! - **MailService trait**: common interface for providers
//! - **Brevo**: transactional email over the Brevo HTTP API
//! - **Mock**: logs messages instead of sending them
//! - **Adapter**: bridges a transport to the core `MailServiceTrait`

pub mod brevo;
pub mod mail_service;
pub mod mock_mail;
pub mod trait_adapter;

#[cfg(test)]
mod tests;

pub use brevo::BrevoMailService;
pub use mail_service::{verification_email, MailService, OutgoingEmail};
pub use mock_mail::MockMailService;
pub use trait_adapter::MailServiceAdapter;

use morph_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

/// Create the mail transport selected by configuration
pub fn create_mail_service(config: &MailConfig) -> Result<Box<dyn MailService>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => {
            tracing::info!(provider = "mock", "Mail transport configured");
            Ok(Box::new(MockMailService::new()))
        }
        MailProvider::Brevo => {
            let service = BrevoMailService::new(config.clone())?;
            tracing::info!(provider = "brevo", "Mail transport configured");
            Ok(Box::new(service))
        }
    }
}
