//! Mock mail transport
//!
//! Logs messages instead of sending them. The code is only visible in debug
//! builds so the flow can be exercised locally.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use morph_shared::utils::email::mask_email;

use super::mail_service::{MailService, OutgoingEmail};
use crate::InfrastructureError;

#[derive(Clone, Default)]
pub struct MockMailService {
    message_count: Arc<AtomicU64>,
    outbox: Arc<Mutex<Vec<OutgoingEmail>>>,
    simulate_failure: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose sends always fail
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages sent so far
    pub fn outbox(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, InfrastructureError> {
        if self.simulate_failure {
            return Err(InfrastructureError::Mail("Simulated mail failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(email.clone());
        }

        info!(
            to = %mask_email(&email.to),
            subject = %email.subject,
            message_id = %message_id,
            event = "mail_mocked",
            "Mock email accepted"
        );
        #[cfg(debug_assertions)]
        tracing::debug!(to = %email.to, html = %email.html, "Mock email body");

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
