//! Configuration for the account service

use morph_shared::config::PasswordConfig;

#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Minimum accepted password length
    pub password_min_length: usize,
    /// Require the OTP session to have been issued for the registering email
    pub require_email_binding: bool,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            password_min_length: 6,
            require_email_binding: true,
        }
    }
}

impl From<&PasswordConfig> for AccountServiceConfig {
    fn from(password: &PasswordConfig) -> Self {
        Self {
            password_min_length: password.min_length,
            ..Default::default()
        }
    }
}
