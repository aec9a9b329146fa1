// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Diagnostics endpoint handler

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::debug;

use super::response::DiagnosticsResponse;
use crate::api::http_server::AppState;
use crate::version;

/// GET /test - Report backend and optional data-store reachability
///
/// Infallible: the probe's `describe` never errors, so the endpoint always
/// returns 200 regardless of data-store configuration.
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let report = state.datastore.describe().await;
    debug!("Diagnostics requested: datastore status={:?}", report.status);

    Json(DiagnosticsResponse {
        backend: "running".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        timestamp: Utc::now(),
        datastore: report,
    })
}
