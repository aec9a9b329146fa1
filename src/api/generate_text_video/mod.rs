// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-to-video endpoint module
//!
//! Provides POST /api/generate-text-video.

pub mod handler;
pub mod request;

pub use handler::generate_text_video_handler;
pub use request::TextVideoRequest;
