//! Account service module
//!
//! Registration gated by an email OTP, password login, and the profile
//! operations of a signed-in user.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::AccountService;
pub use types::{LoginCommand, ProfileUpdate, RegisterCommand};
