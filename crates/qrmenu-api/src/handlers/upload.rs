//! Image upload: returns the image inline as a base64 data URL.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

fn too_large(max_bytes: usize) -> ApiError {
    ApiError::Validation(format!(
        "Image must be smaller than {}MB",
        max_bytes / (1024 * 1024)
    ))
}

/// POST /api/upload
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadResponse> {
    let mut multipart = multipart?;
    let max_bytes = state.config.upload.max_image_bytes;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(ApiError::Validation("File must be an image".to_string()));
        }

        // Stop reading as soon as the limit is crossed.
        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if data.len() + chunk.len() > max_bytes {
                return Err(too_large(max_bytes));
            }
            data.extend_from_slice(&chunk);
        }

        info!("Image uploaded: {} ({} bytes)", content_type, data.len());
        let url = format!("data:{};base64,{}", content_type, STANDARD.encode(&data));
        return Ok(Json(ApiResponse::success_with_message(
            UploadResponse { url },
            "Image uploaded successfully",
        )));
    }

    Err(ApiError::Validation("No file provided".to_string()))
}
