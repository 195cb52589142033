//! Business services containing domain logic and use cases.

pub mod account;
pub mod otp;
pub mod password;
pub mod post;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig, LoginCommand, ProfileUpdate, RegisterCommand};
pub use otp::{
    CodeGenerator, FixedCodeGenerator, IssueCodeResult, MailServiceTrait, OtpService,
    OtpServiceConfig, SecureCodeGenerator, SessionStore,
};
pub use password::PasswordHasher;
pub use post::{ImageGeneratorTrait, PostService, PostServiceConfig};
pub use token::{TokenService, TokenServiceConfig};
