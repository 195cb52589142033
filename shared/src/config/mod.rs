//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT, password hashing and auth cookie configuration
//! - `cache` - Redis connection configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `inference` - Image generation endpoint configuration
//! - `mail` - Transactional mail provider configuration
//! - `server` - HTTP server and CORS configuration
//! - `session` - Session store and OTP lifetime configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod inference;
pub mod mail;
pub mod server;
pub mod session;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig, PasswordConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use inference::InferenceConfig;
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};
pub use session::{SessionBackend, SessionConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub session: SessionConfig,
    pub mail: MailConfig,
    pub inference: InferenceConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            session: SessionConfig::default(),
            mail: MailConfig::default(),
            inference: InferenceConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            session: SessionConfig::from_env(),
            mail: MailConfig::from_env(),
            inference: InferenceConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Reject settings that are unsafe outside development
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() {
            if self.auth.jwt.is_using_default_secret() {
                return Err("JWT_SECRET must be set in production".to_string());
            }
            if self.auth.jwt.secret.len() < 32 {
                return Err("JWT_SECRET must be at least 32 bytes in production".to_string());
            }
            if !self.auth.cookie.secure {
                return Err("COOKIE_SECURE must be enabled in production".to_string());
            }
        }
        if self.server.port == 0 {
            return Err("SERVER_PORT must be non-zero".to_string());
        }
        self.mail.validate()?;
        Ok(())
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
