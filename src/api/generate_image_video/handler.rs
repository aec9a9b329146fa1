// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-to-video endpoint handler

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, info, warn};

use super::request::ImageVideoUpload;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::response::GenerateResponse;

/// POST /api/generate-image-video - Generate a video from an uploaded image
///
/// Pipeline:
/// 1. Decode multipart form (image file + duration_seconds field)
/// 2. Validate content type and duration range
/// 3. Return the demo response; the image bytes are discarded
pub async fn generate_image_video_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!("Image video multipart request received");

    // 1. Decode the form; this fully consumes the upload stream
    let upload = ImageVideoUpload::from_multipart(multipart)
        .await
        .map_err(|e| {
            warn!("Image video upload decode failed: {}", e);
            ApiError::InvalidRequest(e)
        })?;

    // 2. Validate
    if let Err(e) = upload.validate() {
        warn!(
            "Image video validation failed: {} (content_type={})",
            e, upload.content_type
        );
        return Err(ApiError::InvalidRequest(e));
    }

    // 3. Demo mode: the uploaded image never influences the URL
    info!(
        "Image video request accepted: file={:?}, {} bytes, duration={}s (demo mode)",
        upload.file_name,
        upload.bytes.len(),
        upload.duration_seconds
    );
    Ok(Json(GenerateResponse::demo(
        state.config.sample_video_url.clone(),
        upload.duration_seconds,
    )))
}
