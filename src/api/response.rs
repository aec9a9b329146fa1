// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared generation response contract

use serde::{Deserialize, Serialize};

use crate::config::PROVIDER;

/// Note attached to every demo response
pub const DEMO_NOTE: &str =
    "Demo response. Integrate with Replicate/Runway/Pika for real generation.";

/// Response returned by both generation endpoints.
///
/// In demo mode the URL is always the configured sample resource; the
/// request content never influences it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    /// Video URL (always the configured sample in demo mode)
    pub url: String,
    /// Provider tag (always "demo")
    pub provider: String,
    /// Echo of the validated requested duration
    pub duration_seconds: u32,
    /// Human-readable note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl GenerateResponse {
    /// Build a demo-mode response around the configured sample URL.
    pub fn demo(url: String, duration_seconds: u32) -> Self {
        Self {
            url,
            provider: PROVIDER.to_string(),
            duration_seconds,
            note: Some(DEMO_NOTE.to_string()),
        }
    }
}
