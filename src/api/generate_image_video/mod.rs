// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-to-video endpoint module
//!
//! Provides POST /api/generate-image-video (multipart upload).

pub mod handler;
pub mod request;

pub use handler::generate_image_video_handler;
pub use request::ImageVideoUpload;
