//! Domain entities representing core business objects.

pub mod post;
pub mod session;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use post::Post;
pub use session::{SessionRecord, DEFAULT_OTP_EXPIRATION_MINUTES, OTP_MAX, OTP_MIN};
pub use token::Claims;
pub use user::User;
