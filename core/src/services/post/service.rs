//! Post service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::domain::value_objects::GeneratedImage;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::PostRepository;

use super::config::PostServiceConfig;
use super::traits::ImageGeneratorTrait;

pub struct PostService {
    post_repository: Arc<dyn PostRepository>,
    image_generator: Arc<dyn ImageGeneratorTrait>,
    config: PostServiceConfig,
}

impl PostService {
    pub fn new(
        post_repository: Arc<dyn PostRepository>,
        image_generator: Arc<dyn ImageGeneratorTrait>,
        config: PostServiceConfig,
    ) -> Self {
        Self {
            post_repository,
            image_generator,
            config,
        }
    }

    /// Forward a prompt to the image model
    pub async fn generate_image(&self, prompt: &str) -> DomainResult<GeneratedImage> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "prompt".to_string(),
            }
            .into());
        }
        if prompt.chars().count() > self.config.max_prompt_length {
            return Err(ValidationError::InvalidLength {
                field: "prompt".to_string(),
                min: 1,
                max: self.config.max_prompt_length,
            }
            .into());
        }

        let image = self.image_generator.generate(prompt).await.map_err(|e| {
            tracing::error!(error = %e, event = "image_generation_failed", "Image provider call failed");
            DomainError::ExternalService {
                service: "image-generation".to_string(),
                message: e,
            }
        })?;

        tracing::info!(
            prompt_chars = prompt.chars().count(),
            mime_type = %image.mime_type,
            event = "image_generated",
            "Generated image"
        );
        Ok(image)
    }

    /// Share an image to the gallery
    pub async fn create_post(
        &self,
        admin: Uuid,
        name: Option<&str>,
        prompt: Option<&str>,
        photo: Option<&str>,
    ) -> DomainResult<Post> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let (Some(name), Some(prompt), Some(photo)) = (present(name), present(prompt), present(photo)) else {
            return Err(ValidationError::MissingFields.into());
        };

        let post = self
            .post_repository
            .create(Post::new(name, prompt, photo, admin))
            .await?;

        tracing::info!(post_id = %post.id, admin = %admin, event = "post_created", "Post shared");
        Ok(post)
    }

    /// Every post, oldest first
    pub async fn list_posts(&self) -> DomainResult<Vec<Post>> {
        self.post_repository.find_all().await
    }

    pub async fn get_post(&self, id: Uuid) -> DomainResult<Post> {
        self.post_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    pub async fn posts_by_admin(&self, admin: Uuid) -> DomainResult<Vec<Post>> {
        self.post_repository.find_by_admin(admin).await
    }
}
