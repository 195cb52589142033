//! Token service module for JWT management
//!
//! Issues and verifies the HS256 access tokens handed out on registration
//! and login. Tokens are stateless: there is no refresh or revocation store.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
