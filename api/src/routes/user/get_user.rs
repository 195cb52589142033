use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::user::UserDto;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/get-user
pub async fn get_user(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.account_service.get_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserDto::from(&user)),
        Err(error) => handle_domain_error(error),
    }
}
