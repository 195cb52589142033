//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use morph_api::app::{AppState, Dependencies};
use morph_core::domain::entities::user::User;
use morph_core::domain::value_objects::GeneratedImage;
use morph_core::repositories::{MockPostRepository, MockUserRepository};
use morph_core::services::{FixedCodeGenerator, ImageGeneratorTrait, RegisterCommand};
use morph_infra::cache::MemorySessionStore;
use morph_infra::mail::{MailServiceAdapter, MockMailService};
use morph_shared::config::AppConfig;

pub const TEST_OTP: &str = "123456";
pub const TEST_PASSWORD: &str = "secret123";

/// Returns a fixed PNG payload, or fails for prompts containing "fail"
pub struct StubImageGenerator;

#[async_trait]
impl ImageGeneratorTrait for StubImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, String> {
        if prompt.contains("fail") {
            return Err("Model is currently loading".to_string());
        }
        Ok(GeneratedImage::png("aW1hZ2U="))
    }
}

pub struct TestContext {
    pub state: AppState,
    pub mail: MockMailService,
    pub users: Arc<MockUserRepository>,
}

pub fn test_context() -> TestContext {
    test_context_with_mail(MockMailService::new())
}

pub fn test_context_with_mail(mail: MockMailService) -> TestContext {
    let mut config = AppConfig::default();
    config.auth.password.bcrypt_cost = 4;

    let users = Arc::new(MockUserRepository::new());
    let deps = Dependencies {
        user_repository: users.clone(),
        post_repository: Arc::new(MockPostRepository::new()),
        session_store: Arc::new(MemorySessionStore::from_config(&config.session)),
        mail_service: Arc::new(MailServiceAdapter::new(
            Box::new(mail.clone()),
            config.session.otp_expiration_minutes,
        )),
        image_generator: Arc::new(StubImageGenerator),
        code_generator: Some(Arc::new(FixedCodeGenerator::new(TEST_OTP))),
    };

    TestContext {
        state: AppState::new(deps, &config),
        mail,
        users,
    }
}

/// Register `email` through the services and return the user and its token
pub async fn seeded_user(ctx: &TestContext, email: &str) -> (User, String) {
    let issued = ctx
        .state
        .otp_service
        .issue_code(email, None)
        .await
        .expect("issue code");
    let session = ctx
        .state
        .account_service
        .register(RegisterCommand {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some(email.to_string()),
            password: Some(TEST_PASSWORD.to_string()),
            otp: Some(TEST_OTP.to_string()),
            session_id: Some(issued.session_id),
        })
        .await
        .expect("register");
    (session.user, session.token)
}

/// A `multipart/form-data` body and its content type
///
/// Fields with a file name are sent as `image/png` file parts.
pub fn multipart_body(fields: &[(&str, &[u8], Option<&str>)]) -> (String, Vec<u8>) {
    let boundary = "----morph-test-boundary";
    let mut body = Vec::new();
    for (name, value, filename) in fields {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
            }
        }
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    (format!("multipart/form-data; boundary={}", boundary), body)
}

/// Build the full application around a [`TestContext`]
#[macro_export]
macro_rules! init_app {
    ($ctx:expr) => {{
        let state = $ctx.state.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(state.clone()))
                .configure(|cfg| morph_api::app::configure_routes(cfg, &state))
                .default_service(actix_web::web::route().to(morph_api::app::not_found)),
        )
        .await
    }};
}
