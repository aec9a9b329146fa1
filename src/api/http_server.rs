// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Application state, router construction and the server loop

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::diagnostics::diagnostics_handler;
use super::generate_image_video::generate_image_video_handler;
use super::generate_text_video::generate_text_video_handler;
use crate::config::GatewayConfig;
use crate::datastore::{DataStoreProbe, EnvDataStore};
use crate::moderation::PromptModerator;

/// Shared, read-only request state. Cloned per handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub moderator: Arc<PromptModerator>,
    pub datastore: Arc<dyn DataStoreProbe>,
}

impl AppState {
    /// Build state from configuration, wiring the env-backed probe.
    pub fn new(config: Arc<GatewayConfig>) -> Self {
        let moderator = Arc::new(PromptModerator::new(&config.custom_blocked_terms));
        let datastore = Arc::new(EnvDataStore::new(
            config.database_url.clone(),
            config.database_name.clone(),
        ));
        Self {
            config,
            moderator,
            datastore,
        }
    }

    /// Replace the data-store probe (used by tests and future real probes).
    pub fn with_datastore(mut self, datastore: Arc<dyn DataStoreProbe>) -> Self {
        self.datastore = datastore;
        self
    }

    /// Default-configured state for tests.
    pub fn new_for_test() -> Self {
        Self::new(Arc::new(GatewayConfig::default()))
    }
}

/// Build the router with all routes and middleware attached.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/test", get(diagnostics_handler))
        .route("/api/generate-text-video", post(generate_text_video_handler))
        .route(
            "/api/generate-image-video",
            post(generate_image_video_handler),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
pub async fn start_server(state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("VisionFlow gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello from the VisionFlow backend!" }))
}

async fn hello_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}
