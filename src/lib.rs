// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod datastore;
pub mod moderation;
pub mod version;

// Re-export main types
pub use api::errors::{ApiError, ErrorResponse};
pub use api::http_server::{create_app, AppState};
pub use api::response::GenerateResponse;
pub use config::GatewayConfig;
pub use datastore::{DataStoreProbe, DataStoreReport, DataStoreStatus, EnvDataStore};
pub use moderation::{ModerationVerdict, PromptModerator};
