pub mod auth;
pub mod post;
pub mod user;

pub use auth::{AuthResponse, CreateUserRequest, CreatedUser, LoggedInUser, LoginRequest, SendOtpQuery, SendOtpResponse};
pub use post::{CreatePostRequest, GenerateImageRequest, GenerateImageResponse, GetPostQuery, PostDto};
pub use user::{ProfileResponse, UserDto};
