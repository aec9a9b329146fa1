// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-to-video upload decoding and validation

use axum::extract::Multipart;
use bytes::Bytes;

use crate::config::{DEFAULT_DURATION_SECONDS, MAX_DURATION_SECONDS, MIN_DURATION_SECONDS};

/// Decoded multipart upload for POST /api/generate-image-video
#[derive(Debug, Clone)]
pub struct ImageVideoUpload {
    /// Full image payload. Read once, never inspected in demo mode.
    pub bytes: Bytes,
    /// Declared content type of the uploaded file
    pub content_type: String,
    /// Requested clip length in seconds (form field, defaults to 30)
    pub duration_seconds: u32,
    /// Original file name, informational only
    pub file_name: Option<String>,
}

impl ImageVideoUpload {
    /// Decode the multipart form. Expects an `image` file field and an
    /// optional `duration_seconds` text field. Unknown fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, String> {
        let mut image: Option<(Bytes, String, Option<String>)> = None;
        let mut duration_seconds = DEFAULT_DURATION_SECONDS;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| format!("Failed to read multipart field: {}", e))?
        {
            match field.name().unwrap_or("") {
                "image" => {
                    let file_name = field.file_name().map(|n| n.to_string());
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    // Full read of the payload; the stream must be consumed
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| format!("Failed to read image upload: {}", e))?;
                    image = Some((bytes, content_type, file_name));
                }
                "duration_seconds" => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| format!("Failed to read duration_seconds field: {}", e))?;
                    duration_seconds = text
                        .trim()
                        .parse()
                        .map_err(|_| format!("duration_seconds must be an integer, got '{}'", text))?;
                }
                _ => {}
            }
        }

        let (bytes, content_type, file_name) =
            image.ok_or_else(|| "Missing 'image' file field".to_string())?;

        Ok(Self {
            bytes,
            content_type,
            duration_seconds,
            file_name,
        })
    }

    /// Validate the decoded upload
    pub fn validate(&self) -> Result<(), String> {
        if !self.content_type.starts_with("image/") {
            return Err("Please upload a valid image file".to_string());
        }

        if self.duration_seconds < MIN_DURATION_SECONDS
            || self.duration_seconds > MAX_DURATION_SECONDS
        {
            return Err(format!(
                "duration_seconds must be between {} and {}, got {}",
                MIN_DURATION_SECONDS, MAX_DURATION_SECONDS, self.duration_seconds
            ));
        }

        Ok(())
    }
}
