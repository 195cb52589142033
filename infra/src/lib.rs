//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared in `morph_core`:
//!
//! - **Database**: MySQL repositories for users and posts using SQLx
//! - **Cache**: Redis and in-memory session stores
//! - **Mail**: Brevo transactional email and a logging mock
//! - **Inference**: Hugging Face text-to-image client

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Session stores backing the OTP flow
pub mod cache;

/// Mail transports for verification codes
pub mod mail;

/// Image generation client
pub mod inference;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// (De)serialization of stored or received payloads
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Image generation error
    #[error("Inference error: {0}")]
    Inference(String),
}
