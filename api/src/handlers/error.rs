//! Maps domain errors onto HTTP responses
//!
//! Every failure body is a [`ErrorResponse`]. Internal details are logged
//! here and replaced by a generic message.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use std::fmt;

use morph_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use morph_shared::errors::{error_codes, ErrorResponse};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// A domain error travelling through actix's error path
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, body) = classify(&self.0);
        HttpResponse::build(status).json(body)
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = classify(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }
    HttpResponse::build(status).json(body)
}

/// 400 response listing every field `validator` rejected
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        if response.message == "Invalid request" {
            if let Some(first) = messages.first() {
                response.message = first.clone();
            }
        }
        response = response.add_detail(field, messages);
    }
    HttpResponse::BadRequest().json(response)
}

/// JSON body rejected by the extractor; answered in the common error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &error {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, error.to_string());
    actix_web::error::InternalError::from_response(error, HttpResponse::build(status).json(body)).into()
}

fn classify(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::ValidationErr(validation) => {
            (StatusCode::BAD_REQUEST, validation_body(validation))
        }
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource)),
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized"),
        ),
        DomainError::Internal { .. } => internal(),
        DomainError::ExternalService { service, message } => {
            let code = if service == "mail" {
                error_codes::MAIL_ERROR
            } else {
                error_codes::IMAGE_GENERATION_ERROR
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(code, message.clone()),
            )
        }
        DomainError::Auth(auth) => auth_status(auth),
        DomainError::Token(token) => token_status(token),
    }
}

fn validation_body(error: &ValidationError) -> ErrorResponse {
    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string());
    match error.field() {
        Some(field) => response.add_detail("field", field),
        None => response,
    }
}

fn auth_status(error: &AuthError) -> (StatusCode, ErrorResponse) {
    let message = error.to_string();
    match error {
        AuthError::UserAlreadyExists => (
            StatusCode::CONFLICT,
            ErrorResponse::new(error_codes::CONFLICT, message),
        ),
        AuthError::InvalidOrExpiredOtp => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::OTP_INVALID, message),
        ),
        AuthError::InvalidCredentials | AuthError::InvalidOldPassword => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::INVALID_CREDENTIALS, message),
        ),
        AuthError::UserNotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, message),
        ),
        AuthError::MailServiceFailure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::MAIL_ERROR, message),
        ),
    }
}

fn token_status(error: &TokenError) -> (StatusCode, ErrorResponse) {
    let message = error.to_string();
    match error {
        TokenError::TokenGenerationFailed => internal(),
        TokenError::MissingToken => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::UNAUTHORIZED, message),
        ),
        TokenError::TokenExpired => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, message),
        ),
        TokenError::InvalidTokenFormat
        | TokenError::InvalidSignature
        | TokenError::TokenNotYetValid
        | TokenError::InvalidClaims => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_INVALID, message),
        ),
    }
}

fn internal() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_MESSAGE),
    )
}
