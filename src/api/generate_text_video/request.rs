// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text-to-video request types and validation

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_DURATION_SECONDS, MAX_DURATION_SECONDS, MIN_DURATION_SECONDS, MIN_PROMPT_CHARS,
};

/// Request for video generation via POST /api/generate-text-video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextVideoRequest {
    /// Text prompt to guide video generation
    pub prompt: String,

    /// Requested clip length in seconds
    #[serde(default = "default_duration")]
    pub duration_seconds: u32,

    /// Optional voiceover text (accepted, unused in demo mode)
    #[serde(default)]
    pub voiceover: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_SECONDS
}

impl TextVideoRequest {
    /// Validate the request. Runs before moderation so that range errors
    /// surface as invalid_request regardless of prompt content.
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().chars().count() < MIN_PROMPT_CHARS {
            return Err(format!(
                "prompt must be at least {} characters",
                MIN_PROMPT_CHARS
            ));
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
