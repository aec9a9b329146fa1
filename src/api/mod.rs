// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface of the gateway
//!
//! Two generation endpoints (text prompt, image upload), a diagnostics
//! endpoint and two static greetings. All generation responses carry the
//! fixed sample URL; see the `response` module.

pub mod diagnostics;
pub mod errors;
pub mod generate_image_video;
pub mod generate_text_video;
pub mod http_server;
pub mod response;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
pub use response::GenerateResponse;
