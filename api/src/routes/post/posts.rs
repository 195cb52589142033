use actix_web::{web, HttpResponse};
use uuid::Uuid;

use morph_core::errors::ValidationError;
use morph_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::post::{CreatePostRequest, GetPostQuery, PostDto};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/post
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    match state.post_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(ApiResponse::success(
            posts.into_iter().map(PostDto::from).collect::<Vec<_>>(),
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/post
pub async fn create_post(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<CreatePostRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    match state
        .post_service
        .create_post(
            auth.user_id,
            body.name.as_deref(),
            body.prompt.as_deref(),
            body.photo.as_deref(),
        )
        .await
    {
        Ok(post) => HttpResponse::Created().json(ApiResponse::success(PostDto::from(post))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/post/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(error.into()),
    };

    match state.post_service.get_post(id).await {
        Ok(post) => HttpResponse::Ok().json(ApiResponse::success(PostDto::from(post))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/get-post?id=<user id>
///
/// Responds with a bare array of the user's posts.
pub async fn posts_by_user(state: web::Data<AppState>, query: web::Query<GetPostQuery>) -> HttpResponse {
    let Some(raw) = query.id.as_deref().filter(|id| !id.trim().is_empty()) else {
        return handle_domain_error(
            ValidationError::RequiredField {
                field: "id".to_string(),
            }
            .into(),
        );
    };

    let admin = match parse_id(raw) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(error.into()),
    };

    match state.post_service.posts_by_admin(admin).await {
        Ok(posts) => HttpResponse::Ok().json(posts.into_iter().map(PostDto::from).collect::<Vec<_>>()),
        Err(error) => handle_domain_error(error),
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
    })
}
