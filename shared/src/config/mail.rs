//! Transactional mail configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// Which mail transport delivers verification codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    Brevo,
    #[default]
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brevo" | "sendinblue" => Ok(MailProvider::Brevo),
            "mock" => Ok(MailProvider::Mock),
            other => Err(format!("Unknown mail provider: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub provider: MailProvider,

    /// Brevo `api-key` header value
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Transactional email endpoint
    pub api_url: String,

    pub sender_email: String,
    pub sender_name: String,

    /// Retries on 429 and 5xx responses
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_key: None,
            api_url: String::from("https://api.brevo.com/v3/smtp/email"),
            sender_email: String::from("no-reply@ai-morph.local"),
            sender_name: String::from("AI Morph"),
            max_retries: 2,
            retry_delay_ms: 500,
            request_timeout_secs: 15,
        }
    }
}

impl MailConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", MailProvider::Mock),
            api_key: std::env::var("BREVO_API_KEY").ok().filter(|k| !k.is_empty()),
            api_url: env_string("BREVO_API_URL", &defaults.api_url),
            sender_email: env_string("MAIL_SENDER_EMAIL", &defaults.sender_email),
            sender_name: env_string("MAIL_SENDER_NAME", &defaults.sender_name),
            max_retries: env_or("MAIL_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("MAIL_RETRY_DELAY_MS", defaults.retry_delay_ms),
            request_timeout_secs: env_or("MAIL_TIMEOUT_SECONDS", defaults.request_timeout_secs),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.provider == MailProvider::Brevo && self.api_key.is_none() {
            return Err("BREVO_API_KEY must be set when MAIL_PROVIDER=brevo".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("Brevo".parse::<MailProvider>(), Ok(MailProvider::Brevo));
        assert_eq!("mock".parse::<MailProvider>(), Ok(MailProvider::Mock));
        assert!("smtp".parse::<MailProvider>().is_err());
    }

    #[test]
    fn test_brevo_requires_api_key() {
        let config = MailConfig {
            provider: MailProvider::Brevo,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MailConfig {
            provider: MailProvider::Brevo,
            api_key: Some("xkeysib-test".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
