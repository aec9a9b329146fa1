// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-to-video endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::TextVideoRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::response::GenerateResponse;

/// POST /api/generate-text-video - Generate a video from a text prompt
///
/// Pipeline:
/// 1. Validate request (prompt length, duration range)
/// 2. Run prompt moderation (keyword blocklist)
/// 3. Return the demo response with the configured sample URL
pub async fn generate_text_video_handler(
    State(state): State<AppState>,
    Json(request): Json<TextVideoRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!(
        "Text video request received: prompt_len={}, duration={}s, voiceover={}",
        request.prompt.len(),
        request.duration_seconds,
        request.voiceover.is_some()
    );

    // 1. Validate request
    if let Err(e) = request.validate() {
        warn!("Text video validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    // 2. Moderation (keyword blocklist, substring match)
    let verdict = state.moderator.check(request.prompt.trim());
    if verdict.blocked {
        warn!(
            "Text video prompt blocked by moderation: term={:?}",
            verdict.matched_term
        );
        return Err(ApiError::ModerationBlocked(
            "Prompt blocked by moderation policy.".to_string(),
        ));
    }

    // 3. Demo mode: the prompt never influences the URL
    info!(
        "Text video request accepted: duration={}s (demo mode)",
        request.duration_seconds
    );
    Ok(Json(GenerateResponse::demo(
        state.config.sample_video_url.clone(),
        request.duration_seconds,
    )))
}
