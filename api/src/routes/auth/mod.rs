//! OTP issue, registration and login

pub mod create_user;
pub mod login_user;
pub mod send_otp;

pub use create_user::create_user;
pub use login_user::login_user;
pub use send_otp::send_otp;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

use morph_shared::config::CookieConfig;

use crate::middleware::cors::SESSION_ID_HEADER;

/// Cookie carrying the access token for browser clients
pub(crate) fn auth_cookie(config: &CookieConfig, token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token)
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Session id sent by the client, if any
pub(crate) fn session_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
