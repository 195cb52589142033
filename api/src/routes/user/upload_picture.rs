use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::user::ProfileResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::{read_form, PICTURE_FIELD};

/// Handler for POST /api/v1/upload-profile-picture
pub async fn upload_profile_picture(
    state: web::Data<AppState>,
    auth: AuthContext,
    payload: Multipart,
) -> HttpResponse {
    let picture = match read_form(payload).await {
        Ok(mut fields) => fields.remove(PICTURE_FIELD).unwrap_or_default(),
        Err(error) => return handle_domain_error(error.into()),
    };

    match state
        .account_service
        .upload_profile_picture(auth.user_id, picture)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse::new(&user)),
        Err(error) => handle_domain_error(error),
    }
}
