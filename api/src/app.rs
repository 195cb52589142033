//! Application state and route table
//!
//! Services are built once from their ports and shared across workers
//! through `web::Data<AppState>`.

use actix_web::{guard, web, HttpResponse};
use std::sync::Arc;

use morph_core::repositories::{PostRepository, UserRepository};
use morph_core::services::{
    AccountService, AccountServiceConfig, CodeGenerator, ImageGeneratorTrait, MailServiceTrait,
    OtpService, OtpServiceConfig, PasswordHasher, PostService, PostServiceConfig, SessionStore,
    TokenService, TokenServiceConfig,
};
use morph_shared::config::{AppConfig, CookieConfig};
use morph_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::JwtAuth;
use crate::routes::{auth, post, user};

/// Adapters the services are assembled from
pub struct Dependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub post_repository: Arc<dyn PostRepository>,
    pub session_store: Arc<dyn SessionStore>,
    pub mail_service: Arc<dyn MailServiceTrait>,
    pub image_generator: Arc<dyn ImageGeneratorTrait>,
    /// Overrides the random OTP source
    pub code_generator: Option<Arc<dyn CodeGenerator>>,
}

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub otp_service: Arc<OtpService>,
    pub account_service: Arc<AccountService>,
    pub post_service: Arc<PostService>,
    pub token_service: Arc<TokenService>,
    pub cookie: CookieConfig,
    /// Upper bound for JSON request bodies
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(deps: Dependencies, config: &AppConfig) -> Self {
        let mut otp_service = OtpService::new(
            deps.user_repository.clone(),
            deps.session_store,
            deps.mail_service,
            OtpServiceConfig::from(&config.session),
        );
        if let Some(generator) = deps.code_generator {
            otp_service = otp_service.with_code_generator(generator);
        }
        let otp_service = Arc::new(otp_service);

        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

        let account_service = Arc::new(AccountService::new(
            deps.user_repository,
            otp_service.clone(),
            token_service.clone(),
            PasswordHasher::new(config.auth.password.bcrypt_cost),
            AccountServiceConfig::from(&config.auth.password),
        ));

        let post_service = Arc::new(PostService::new(
            deps.post_repository,
            deps.image_generator,
            PostServiceConfig::from(&config.inference),
        ));

        Self {
            otp_service,
            account_service,
            post_service,
            token_service,
            cookie: config.auth.cookie.clone(),
            max_payload_size: config.server.max_payload_size,
        }
    }
}

/// Register every route under `/api/v1` plus `/health`
///
/// `POST /post` needs a token while `GET /post` does not, so the two
/// methods live on separate guarded resources.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let jwt = || JwtAuth::new(state.token_service.clone(), state.cookie.name.clone());

    cfg.app_data(
        web::JsonConfig::default()
            .limit(state.max_payload_size)
            .error_handler(json_error_handler),
    )
    .route("/health", web::get().to(health_check))
    .service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .route("/send-otp", web::get().to(auth::send_otp))
            .route("/create-user", web::post().to(auth::create_user))
            .route("/login-user", web::post().to(auth::login_user))
            .service(
                web::resource("/get-user")
                    .wrap(jwt())
                    .route(web::get().to(user::get_user)),
            )
            .service(
                web::resource("/profile")
                    .wrap(jwt())
                    .route(web::put().to(user::update_profile)),
            )
            .service(
                web::resource("/upload-profile-picture")
                    .wrap(jwt())
                    .route(web::post().to(user::upload_profile_picture)),
            )
            .route("/imgGenerate", web::post().to(post::generate_image))
            .service(
                web::resource("/post")
                    .guard(guard::Post())
                    .wrap(jwt())
                    .route(web::post().to(post::create_post)),
            )
            .service(web::resource("/post").route(web::get().to(post::list_posts)))
            .route("/post/{id}", web::get().to(post::get_post))
            .route("/get-post", web::get().to(post::posts_by_user)),
    );
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ai-morph-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
