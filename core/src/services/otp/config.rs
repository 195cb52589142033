//! Configuration for the OTP service

use morph_shared::config::SessionConfig;

use crate::domain::entities::session::DEFAULT_OTP_EXPIRATION_MINUTES;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
    /// Delete the session record after a successful verification
    pub single_use: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_OTP_EXPIRATION_MINUTES,
            single_use: false,
        }
    }
}

impl From<&SessionConfig> for OtpServiceConfig {
    fn from(session: &SessionConfig) -> Self {
        Self {
            code_expiration_minutes: session.otp_expiration_minutes,
            single_use: session.otp_single_use,
        }
    }
}
