// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for GET /test and the static greeting endpoints
//!
//! The diagnostics endpoint must return 200 for every probe and
//! configuration combination; it is purely informational.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use visionflow_gateway::api::http_server::{create_app, AppState};
use visionflow_gateway::config::GatewayConfig;
use visionflow_gateway::datastore::{DataStoreProbe, DataStoreReport, DataStoreStatus};

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Probe double that reports a fixed tier
struct FixedProbe {
    status: DataStoreStatus,
    detail: Option<String>,
}

#[async_trait]
impl DataStoreProbe for FixedProbe {
    fn is_available(&self) -> bool {
        matches!(
            self.status,
            DataStoreStatus::Connected | DataStoreStatus::ConnectedWithError
        )
    }

    async fn describe(&self) -> DataStoreReport {
        DataStoreReport {
            status: self.status,
            detail: self.detail.clone(),
            url_configured: true,
            name_configured: true,
            collections: vec!["videos".to_string()],
        }
    }
}

#[tokio::test]
async fn test_diagnostics_without_datastore() {
    let app = create_app(AppState::new_for_test());

    let response = app.oneshot(get_request("/test")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["backend"], "running");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["datastore"]["status"], "not_configured");
    assert_eq!(body["datastore"]["url_configured"], false);
}

#[tokio::test]
async fn test_diagnostics_with_configured_datastore() {
    let config = GatewayConfig {
        database_url: Some("mongodb://localhost:27017".to_string()),
        database_name: Some("visionflow".to_string()),
        ..GatewayConfig::default()
    };
    let app = create_app(AppState::new(Arc::new(config)));

    let response = app.oneshot(get_request("/test")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["datastore"]["status"], "connected");
    assert_eq!(body["datastore"]["url_configured"], true);
    assert_eq!(body["datastore"]["name_configured"], true);
}

#[tokio::test]
async fn test_diagnostics_never_errors_for_any_probe_tier() {
    let tiers = [
        DataStoreStatus::NotConfigured,
        DataStoreStatus::Unavailable,
        DataStoreStatus::Connected,
        DataStoreStatus::ConnectedWithError,
    ];

    for status in tiers {
        let probe = FixedProbe {
            status,
            detail: Some("probe detail".to_string()),
        };
        let state = AppState::new_for_test().with_datastore(Arc::new(probe));
        let app = create_app(state);

        let response = app.oneshot(get_request("/test")).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "tier {:?} must not fail",
            status
        );
    }
}

#[tokio::test]
async fn test_diagnostics_reports_probe_collections() {
    let probe = FixedProbe {
        status: DataStoreStatus::Connected,
        detail: None,
    };
    let state = AppState::new_for_test().with_datastore(Arc::new(probe));
    let app = create_app(state);

    let response = app.oneshot(get_request("/test")).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["datastore"]["collections"][0], "videos");
}

#[tokio::test]
async fn test_root_greeting() {
    let app = create_app(AppState::new_for_test());

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Hello from the VisionFlow backend!");
}

#[tokio::test]
async fn test_api_hello_greeting() {
    let app = create_app(AppState::new_for_test());

    let response = app.oneshot(get_request("/api/hello")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Hello from the backend API!");
}
