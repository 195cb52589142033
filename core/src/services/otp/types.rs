//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// Session the code is bound to; the client echoes it on registration
    pub session_id: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Message id from the mail provider
    pub message_id: String,
}
