pub mod post;
pub mod user;

pub use post::{MockPostRepository, PostRepository};
pub use user::{MockUserRepository, UserRepository};
