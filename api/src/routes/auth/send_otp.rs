use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use morph_shared::utils::email::mask_email;

use crate::app::AppState;
use crate::dto::auth::{SendOtpQuery, SendOtpResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::cors::SESSION_ID_HEADER;

use super::session_header;

/// Handler for GET /api/v1/send-otp?email=
///
/// Mails a 6-digit code and binds it to the caller's session. A client that
/// sends `X-Session-Id` keeps its session; otherwise a new id is returned.
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP sent successfully", "sessionID": "9f1c..." }
/// ```
///
/// ## Errors
/// - 400 malformed email
/// - 409 an account already uses the email
/// - 500 session store or mail failure
pub async fn send_otp(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<SendOtpQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    let session_id = session_header(&req);
    tracing::info!(
        email = %mask_email(&query.email),
        has_session = session_id.is_some(),
        event = "send_otp_requested",
        "Processing send-otp request"
    );

    match state
        .otp_service
        .issue_code(&query.email, session_id.as_deref())
        .await
    {
        Ok(issued) => HttpResponse::Ok()
            .insert_header((SESSION_ID_HEADER, issued.session_id.clone()))
            .json(SendOtpResponse {
                message: "OTP sent successfully".to_string(),
                session_id: issued.session_id,
            }),
        Err(error) => handle_domain_error(error),
    }
}
