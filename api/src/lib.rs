//! HTTP layer of the AI Morph backend
//!
//! Library exports for the binary and the integration tests.

pub mod app;
pub mod bootstrap;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure_routes, AppState, Dependencies};
