//! Image generation and the gallery

pub mod generate;
pub mod posts;

pub use generate::generate_image;
pub use posts::{create_post, get_post, list_posts, posts_by_user};
