//! Error envelope returned by every failing endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `{ error, message, details?, timestamp }`
///
/// `error` is one of [`error_codes`] and is stable for clients to branch on;
/// `message` is meant for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    pub message: String,

    /// Per-field context, e.g. which input failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach one detail entry; values that fail to serialize are skipped
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.details
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value);
        }
        self
    }
}

/// Machine-readable error codes
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const OTP_INVALID: &str = "OTP_INVALID";

    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";

    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";

    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const MAIL_ERROR: &str = "MAIL_ERROR";
    pub const IMAGE_GENERATION_ERROR: &str = "IMAGE_GENERATION_ERROR";
}
