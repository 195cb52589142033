//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod generated_image;

// Re-export commonly used types
pub use auth_response::AuthSession;
pub use generated_image::GeneratedImage;
