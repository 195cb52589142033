//! Image generation endpoint configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    /// Hosted model endpoint receiving `{ "inputs": prompt }`
    pub model_url: String,

    /// Bearer token for the inference provider
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Generation can take a while on a cold model
    pub request_timeout_secs: u64,

    /// Upper bound on accepted prompt length in characters
    pub max_prompt_length: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model_url: String::from(DEFAULT_MODEL_URL),
            api_key: None,
            request_timeout_secs: 120,
            max_prompt_length: 2000,
        }
    }
}

impl InferenceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_url: env_string("HF_MODEL_URL", DEFAULT_MODEL_URL),
            api_key: std::env::var("HF_API_KEY").ok().filter(|k| !k.is_empty()),
            request_timeout_secs: env_or("HF_TIMEOUT_SECONDS", defaults.request_timeout_secs),
            max_prompt_length: env_or("HF_MAX_PROMPT_LENGTH", defaults.max_prompt_length),
        }
    }
}
