//! Session store and OTP lifetime configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Where session records live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Redis,
    Memory,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(SessionBackend::Redis),
            "memory" | "in-memory" => Ok(SessionBackend::Memory),
            other => Err(format!("Unknown session store: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub backend: SessionBackend,

    /// Lifetime of a session record in the store, independent of OTP expiry
    pub ttl_seconds: u64,

    /// How long an issued code stays valid
    pub otp_expiration_minutes: i64,

    /// Delete the session record after the first successful verification
    pub otp_single_use: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::Redis,
            ttl_seconds: 86_400,
            otp_expiration_minutes: 10,
            otp_single_use: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env_or("SESSION_STORE", defaults.backend),
            ttl_seconds: env_or("SESSION_TTL_SECONDS", defaults.ttl_seconds),
            otp_expiration_minutes: env_or("OTP_EXPIRATION_MINUTES", defaults.otp_expiration_minutes),
            otp_single_use: env_or("OTP_SINGLE_USE", defaults.otp_single_use),
        }
    }
}
