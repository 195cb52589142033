//! In-memory implementation of PostRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

use super::trait_::PostRepository;

/// Keeps posts in insertion order
#[derive(Clone, Default)]
pub struct MockPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_admin(&self, admin: Uuid) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| p.is_owned_by(admin)).cloned().collect())
    }
}
