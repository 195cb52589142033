//! JWT authentication middleware for protecting API endpoints.
//!
//! The token is read from the `Authorization: Bearer` header, falling back to
//! the auth cookie. Verified claims are injected into the request extensions
//! as an [`AuthContext`]; a missing or bad token ends the request with a JSON
//! 401 before the handler runs.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use morph_core::domain::entities::token::Claims;
use morph_core::errors::{DomainError, TokenError};
use morph_core::services::TokenService;

use crate::handlers::error::ApiError;

/// Authenticated caller, taken from verified JWT claims
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            email: claims.email,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>, cookie_name: impl Into<String>) -> Self {
        Self {
            token_service,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verified = authenticate(&req, &self.token_service, &self.cookie_name);

        Box::pin(async move {
            match verified {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    tracing::debug!(
                        path = %req.path(),
                        error = %error,
                        event = "auth_rejected",
                        "Request rejected by JWT middleware"
                    );
                    let response = ApiError::from(error).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
    cookie_name: &str,
) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req)
        .or_else(|| req.cookie(cookie_name).map(|c| c.value().to_string()))
        .filter(|t| !t.is_empty())
        .ok_or(DomainError::Token(TokenError::MissingToken))?;

    let claims = token_service.verify_access_token(&token)?;
    AuthContext::from_claims(claims)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::Token(TokenError::MissingToken)).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use morph_core::domain::entities::user::User;
    use morph_core::services::TokenServiceConfig;

    fn token_service() -> TokenService {
        TokenService::new(TokenServiceConfig::default())
    }

    #[actix_web::test]
    async fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[actix_web::test]
    async fn test_authenticate_falls_back_to_cookie() {
        let tokens = token_service();
        let user = User::new("Ada", "Lovelace", "ada@example.com", "hash");
        let token = tokens.generate_access_token(&user).unwrap();

        let req = test::TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new("token", token))
            .to_srv_request();

        let context = authenticate(&req, &tokens, "token").unwrap();
        assert_eq!(context.user_id, user.id);
        assert_eq!(context.email, "ada@example.com");
    }

    #[actix_web::test]
    async fn test_authenticate_header_wins_over_cookie() {
        let tokens = token_service();
        let user = User::new("Ada", "Lovelace", "ada@example.com", "hash");
        let token = tokens.generate_access_token(&user).unwrap();

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .cookie(actix_web::cookie::Cookie::new("token", "garbage"))
            .to_srv_request();

        assert!(authenticate(&req, &tokens, "token").is_ok());
    }

    #[actix_web::test]
    async fn test_authenticate_rejects_missing_and_garbage() {
        let tokens = token_service();

        let req = test::TestRequest::default().to_srv_request();
        assert!(matches!(
            authenticate(&req, &tokens, "token"),
            Err(DomainError::Token(TokenError::MissingToken))
        ));

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer not.a.jwt"))
            .to_srv_request();
        assert!(matches!(authenticate(&req, &tokens, "token"), Err(DomainError::Token(_))));
    }
}
