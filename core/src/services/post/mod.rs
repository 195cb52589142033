//! Image generation and the public gallery of posts.

pub mod config;
pub mod service;
pub mod traits;


pub use config::PostServiceConfig;
pub use service::PostService;
pub use traits::ImageGeneratorTrait;
