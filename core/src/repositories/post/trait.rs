//! Post repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

/// Persistence for gallery posts. Posts are append-only.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post
    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Every post, oldest first
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;

    /// Posts owned by one user, oldest first
    async fn find_by_admin(&self, admin: Uuid) -> Result<Vec<Post>, DomainError>;
}
