use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, LoggedInUser, LoginRequest};
use crate::handlers::error::handle_domain_error;

use super::auth_cookie;

/// Handler for POST /api/v1/login-user
pub async fn login_user(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> HttpResponse {
    match state.account_service.login(body.into_inner().into()).await {
        Ok(session) => {
            let cookie = auth_cookie(&state.cookie, session.token.clone(), session.expires_in);
            HttpResponse::Ok().cookie(cookie).json(AuthResponse {
                message: "User logged in successfully".to_string(),
                token: session.token,
                user: LoggedInUser::from(&session.user),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
