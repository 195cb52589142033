//! Post service configuration

use morph_shared::config::InferenceConfig;

#[derive(Debug, Clone)]
pub struct PostServiceConfig {
    /// Longest prompt forwarded to the model, in characters
    pub max_prompt_length: usize,
}

impl Default for PostServiceConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: 2000,
        }
    }
}

impl From<&InferenceConfig> for PostServiceConfig {
    fn from(config: &InferenceConfig) -> Self {
        Self {
            max_prompt_length: config.max_prompt_length,
        }
    }
}
