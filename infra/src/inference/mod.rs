//! Text-to-image inference clients

pub mod huggingface;

pub use huggingface::{decode_inference_response, HuggingFaceClient};
