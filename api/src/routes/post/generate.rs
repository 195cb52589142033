use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::post::{GenerateImageRequest, GenerateImageResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/imgGenerate
///
/// ## Success (200 OK)
/// ```json
/// { "photo": "data:image/png;base64,iVBORw0..." }
/// ```
pub async fn generate_image(
    state: web::Data<AppState>,
    body: web::Json<GenerateImageRequest>,
) -> HttpResponse {
    match state.post_service.generate_image(&body.prompt).await {
        Ok(image) => HttpResponse::Ok().json(GenerateImageResponse {
            photo: image.to_data_uri(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
