//! Hugging Face hosted inference client
//!
//! Sends `{ "inputs": prompt }` with a bearer key. The endpoint answers
//! either with raw image bytes or with a JSON array carrying a base64 image.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use morph_core::domain::value_objects::GeneratedImage;
use morph_core::services::post::ImageGeneratorTrait;
use morph_shared::config::InferenceConfig;

use crate::InfrastructureError;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

pub struct HuggingFaceClient {
    client: Client,
    config: InferenceConfig,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        if config.api_key.is_none() {
            tracing::warn!("HF_API_KEY not set, inference requests will be anonymous");
        }

        Ok(Self { client, config })
    }

    async fn request(&self, prompt: &str) -> Result<GeneratedImage, InfrastructureError> {
        let mut request = self
            .client
            .post(&self.config.model_url)
            .json(&InferenceRequest { inputs: prompt });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %text, "Inference endpoint returned an error");
            return Err(InfrastructureError::Inference(format!("HF API error: {}", text)));
        }

        let bytes = response.bytes().await?;
        decode_inference_response(&content_type, &bytes)
    }
}

#[async_trait]
impl ImageGeneratorTrait for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, String> {
        self.request(prompt).await.map_err(|e| e.to_string())
    }
}

/// Turn a successful inference response body into an image
pub fn decode_inference_response(
    content_type: &str,
    body: &[u8],
) -> Result<GeneratedImage, InfrastructureError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" {
        let value: Value = serde_json::from_slice(body)?;
        let first = value.get(0);
        let image = first
            .and_then(|v| v.get("generated_image"))
            .or_else(|| first.and_then(|v| v.get("image")))
            .and_then(Value::as_str)
            .ok_or_else(|| InfrastructureError::Inference("No image returned in JSON".to_string()))?;
        return Ok(GeneratedImage::png(image));
    }

    if mime.starts_with("image/") {
        if body.is_empty() {
            return Err(InfrastructureError::Inference("Empty image body".to_string()));
        }
        return Ok(GeneratedImage::new(mime, STANDARD.encode(body)));
    }

    Err(InfrastructureError::Inference(format!(
        "Unexpected content type: {}",
        content_type
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_image_bytes() {
        let image = decode_inference_response("image/jpeg", &[0xff, 0xd8, 0xff]).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.base64, "/9j/");
        assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_json_generated_image() {
        let body = br#"[{"generated_image":"iVBORw0KGgo="}]"#;
        let image = decode_inference_response("application/json; charset=utf-8", body).unwrap();
        assert_eq!(image, GeneratedImage::png("iVBORw0KGgo="));
    }

    #[test]
    fn test_json_image_fallback_field() {
        let body = br#"[{"image":"AAAA"}]"#;
        let image = decode_inference_response("application/json", body).unwrap();
        assert_eq!(image.base64, "AAAA");
    }

    #[test]
    fn test_json_without_image() {
        let body = br#"{"error":"Model is currently loading","estimated_time":20.0}"#;
        let result = decode_inference_response("application/json", body);
        assert!(matches!(result, Err(InfrastructureError::Inference(_))));
    }

    #[test]
    fn test_unexpected_content_type() {
        let result = decode_inference_response("text/html", b"<html></html>");
        assert!(matches!(result, Err(InfrastructureError::Inference(msg)) if msg.contains("text/html")));
    }

    #[tokio::test]
    #[ignore] // Calls the hosted model; needs HF_API_KEY
    async fn test_live_generation() {
        let client = HuggingFaceClient::new(InferenceConfig::from_env()).unwrap();
        let image = client.generate("a watercolor fox").await.unwrap();
        assert!(!image.base64.is_empty());
    }
}
