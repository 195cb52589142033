//! Brevo transactional email
//!
//! `POST /v3/smtp/email` with the `api-key` header. Requests are retried on
//! 429 and 5xx responses with exponential backoff.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use morph_shared::config::MailConfig;
use morph_shared::utils::email::mask_email;

use super::mail_service::{MailService, OutgoingEmail};
use crate::InfrastructureError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct Contact<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub email: &'a str,
}

/// Request body of the send endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendSmtpEmail<'a> {
    pub sender: Contact<'a>,
    pub to: Vec<Contact<'a>>,
    pub subject: &'a str,
    pub html_content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendSmtpEmailResponse {
    pub message_id: Option<String>,
}

pub struct BrevoMailService {
    client: Client,
    config: MailConfig,
    api_key: String,
}

impl BrevoMailService {
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| InfrastructureError::Config("BREVO_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(sender = %mask_email(&config.sender_email), "Brevo mail service initialized");

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub(crate) fn payload<'a>(&'a self, email: &'a OutgoingEmail) -> SendSmtpEmail<'a> {
        SendSmtpEmail {
            sender: Contact {
                name: Some(&self.config.sender_name),
                email: &self.config.sender_email,
            },
            to: vec![Contact {
                name: None,
                email: &email.to,
            }],
            subject: &email.subject,
            html_content: &email.html,
        }
    }

    async fn send_once(&self, email: &OutgoingEmail) -> Result<Result<String, StatusCode>, InfrastructureError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.api_key)
            .header("accept", "application/json")
            .json(&self.payload(email))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: SendSmtpEmailResponse = response.json().await?;
            return Ok(Ok(body.message_id.unwrap_or_default()));
        }

        let text = response.text().await.unwrap_or_default();
        if is_retriable_status(status) {
            warn!(status = status.as_u16(), body = %text, "Brevo request failed");
            return Ok(Err(status));
        }

        error!(status = status.as_u16(), body = %text, "Brevo rejected the message");
        Err(InfrastructureError::Mail(format!("Brevo returned {}: {}", status, text)))
    }
}

#[async_trait]
impl MailService for BrevoMailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, InfrastructureError> {
        let mut attempt = 0;
        let mut delay = self.config.retry_delay_ms;

        loop {
            attempt += 1;
            match self.send_once(email).await {
                Ok(Ok(message_id)) => {
                    info!(
                        to = %mask_email(&email.to),
                        message_id = %message_id,
                        event = "mail_sent",
                        "Email sent"
                    );
                    return Ok(message_id);
                }
                Ok(Err(status)) if attempt <= self.config.max_retries => {
                    warn!(attempt, status = status.as_u16(), delay_ms = delay, "Retrying Brevo send");
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                }
                Ok(Err(status)) => {
                    return Err(InfrastructureError::Mail(format!(
                        "Brevo returned {} after {} attempts",
                        status, attempt
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Brevo"
    }
}

pub(crate) fn is_retriable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}
