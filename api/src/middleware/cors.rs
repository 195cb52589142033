//! CORS middleware configuration for the browser client.
//!
//! The auth cookie only travels cross-origin when credentials are allowed,
//! which in turn rules out a wildcard origin. Origins therefore always come
//! from configuration.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use morph_shared::config::CorsConfig;

/// Header carrying the OTP session id between send-otp and create-user
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static(SESSION_ID_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(SESSION_ID_HEADER)])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
