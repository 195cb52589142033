use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use morph_core::services::ProfileUpdate;

use crate::app::AppState;
use crate::dto::user::ProfileResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::{read_form, text_field, PICTURE_FIELD};

/// Handler for PUT /api/v1/profile
///
/// Multipart fields: `firstName`, `lastName`, `oldPassword`, `password`,
/// `profilePicture`. Any subset may be sent. The user is always the token's
/// subject.
pub async fn update_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    payload: Multipart,
) -> HttpResponse {
    let mut fields = match read_form(payload).await {
        Ok(fields) => fields,
        Err(error) => return handle_domain_error(error.into()),
    };

    let update = ProfileUpdate {
        first_name: text_field(&mut fields, "firstName"),
        last_name: text_field(&mut fields, "lastName"),
        old_password: text_field(&mut fields, "oldPassword"),
        password: text_field(&mut fields, "password"),
        profile_picture: fields.remove(PICTURE_FIELD),
    };

    if update.is_empty() {
        tracing::debug!(user_id = %auth.user_id, "Profile update without changes");
    }

    match state.account_service.update_profile(auth.user_id, update).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse::new(&user)),
        Err(error) => handle_domain_error(error),
    }
}
