// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gateway configuration loaded from environment variables

use std::env;
use url::Url;

/// Maximum accepted clip length in seconds (demo limit to control costs)
pub const MAX_DURATION_SECONDS: u32 = 60;

/// Minimum accepted clip length in seconds
pub const MIN_DURATION_SECONDS: u32 = 1;

/// Clip length applied when the client does not supply one
pub const DEFAULT_DURATION_SECONDS: u32 = 30;

/// Minimum prompt length after trimming
pub const MIN_PROMPT_CHARS: usize = 3;

/// Provider tag stamped on every generation response
pub const PROVIDER: &str = "demo";

/// Sample video returned by every generation request in demo mode
pub const DEFAULT_SAMPLE_VIDEO_URL: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

/// Configuration for the gateway service
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to listen on
    pub port: u16,
    /// Host address to bind
    pub host: String,
    /// Optional data-store URL (presence-checked only, never dialed)
    pub database_url: Option<String>,
    /// Optional data-store name (presence-checked only)
    pub database_name: Option<String>,
    /// Video URL returned by every generation request
    pub sample_video_url: String,
    /// Extra moderation terms appended to the built-in blocklist
    pub custom_blocked_terms: Vec<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
            sample_video_url: env::var("SAMPLE_VIDEO_URL")
                .unwrap_or_else(|_| DEFAULT_SAMPLE_VIDEO_URL.to_string()),
            custom_blocked_terms: env::var("MODERATION_BLOCKED_TERMS")
                .map(|v| {
                    v.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }
        if Url::parse(&self.sample_video_url).is_err() {
            return Err(format!(
                "Sample video URL is not a valid URL: {}",
                self.sample_video_url
            ));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            database_url: None,
            database_name: None,
            sample_video_url: DEFAULT_SAMPLE_VIDEO_URL.to_string(),
            custom_blocked_terms: Vec::new(),
        }
    }
}
