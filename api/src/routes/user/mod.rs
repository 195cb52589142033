//! Authenticated user profile routes

pub mod get_user;
pub mod profile;
pub mod upload_picture;

pub use get_user::get_user;
pub use profile::update_profile;
pub use upload_picture::upload_profile_picture;

use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

use morph_core::errors::ValidationError;

/// Largest accepted size of a single form field
pub(crate) const MAX_FIELD_BYTES: usize = 5 * 1024 * 1024;

/// Multipart field carrying the picture
pub(crate) const PICTURE_FIELD: &str = "profilePicture";

/// Collect every named multipart field into memory
///
/// A later field with the same name replaces the earlier one.
pub(crate) async fn read_form(mut payload: Multipart) -> Result<HashMap<String, Vec<u8>>, ValidationError> {
    let mut fields = HashMap::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            tracing::debug!(error = %e, "Malformed multipart body");
            ValidationError::InvalidFormat {
                field: "multipart".to_string(),
            }
        })?;

        let Some(name) = field.content_disposition().get_name().map(str::to_string) else {
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|_| ValidationError::InvalidFormat { field: name.clone() })?;
            if bytes.len() + chunk.len() > MAX_FIELD_BYTES {
                return Err(ValidationError::InvalidLength {
                    field: name,
                    min: 0,
                    max: MAX_FIELD_BYTES,
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        fields.insert(name, bytes);
    }

    Ok(fields)
}

/// A text field, or `None` when it is missing or not UTF-8
pub(crate) fn text_field(fields: &mut HashMap<String, Vec<u8>>, name: &str) -> Option<String> {
    fields.remove(name).and_then(|bytes| String::from_utf8(bytes).ok())
}
