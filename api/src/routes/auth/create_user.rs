use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::{AuthResponse, CreateUserRequest, CreatedUser};
use crate::handlers::error::handle_domain_error;

use super::{auth_cookie, session_header};

/// Handler for POST /api/v1/create-user
///
/// The OTP session comes from the `X-Session-Id` header, or from a
/// `sessionId` body field when the header is absent. On success the token
/// is returned in the body and as an http-only cookie.
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let command = body.into_inner().into_command(session_header(&req));

    match state.account_service.register(command).await {
        Ok(session) => {
            let cookie = auth_cookie(&state.cookie, session.token.clone(), session.expires_in);
            HttpResponse::Ok().cookie(cookie).json(AuthResponse {
                message: "User created successfully".to_string(),
                token: session.token,
                user: CreatedUser::from(&session.user),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
