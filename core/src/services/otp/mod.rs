//! Email OTP service module
//!
//! This module implements the session-bound one-time password workflow:
//! - Code generation (6 digits, OS randomness)
//! - Binding the code to a session record with an absolute expiry
//! - Dispatch of the code through a mail transport
//! - Verification of a candidate code against the session record

mod config;
mod generator;
mod service;
mod traits;
mod types;


pub use config::OtpServiceConfig;
pub use generator::{FixedCodeGenerator, SecureCodeGenerator};
pub use service::OtpService;
pub use traits::{CodeGenerator, MailServiceTrait, SessionStore};
pub use types::IssueCodeResult;
