//! Port to the text-to-image provider

use async_trait::async_trait;

use crate::domain::value_objects::GeneratedImage;

#[async_trait]
pub trait ImageGeneratorTrait: Send + Sync {
    /// Render `prompt` into a single image
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, String>;
}
