// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Optional data-store capability probe
//!
//! The gateway itself never talks to a data store; the `/test` diagnostics
//! endpoint only reports whether one is configured. The probe is an injected
//! capability so the health check composes without ambient globals, and test
//! doubles can simulate every availability tier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Availability tier reported by a probe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataStoreStatus {
    /// No data store is configured
    NotConfigured,
    /// Configured but not reachable
    Unavailable,
    /// Configured and assumed reachable
    Connected,
    /// Reachable but the last operation reported an error
    ConnectedWithError,
}

/// Diagnostic report produced by a probe. Purely informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataStoreReport {
    pub status: DataStoreStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub url_configured: bool,
    pub name_configured: bool,
    /// Collection names, when a live probe can supply them
    pub collections: Vec<String>,
}

/// Capability interface for the optional data store.
///
/// `describe` must never fail and must never panic; the diagnostics endpoint
/// depends on it being infallible.
#[async_trait]
pub trait DataStoreProbe: Send + Sync {
    fn is_available(&self) -> bool;
    async fn describe(&self) -> DataStoreReport;
}

/// Probe backed by environment presence checks only.
///
/// `DATABASE_URL` / `DATABASE_NAME` are captured at construction (via config),
/// never read ambiently and never dialed. With both present the store is
/// assumed reachable; the collections list stays empty because no client
/// exists.
pub struct EnvDataStore {
    database_url: Option<String>,
    database_name: Option<String>,
}

impl EnvDataStore {
    pub fn new(database_url: Option<String>, database_name: Option<String>) -> Self {
        Self {
            database_url,
            database_name,
        }
    }
}

#[async_trait]
impl DataStoreProbe for EnvDataStore {
    fn is_available(&self) -> bool {
        self.database_url.is_some()
    }

    async fn describe(&self) -> DataStoreReport {
        let url_configured = self.database_url.is_some();
        let name_configured = self.database_name.is_some();

        let (status, detail) = if !url_configured {
            (
                DataStoreStatus::NotConfigured,
                Some("DATABASE_URL is not set".to_string()),
            )
        } else if !name_configured {
            (
                DataStoreStatus::Connected,
                Some("DATABASE_NAME is not set; using server default".to_string()),
            )
        } else {
            (DataStoreStatus::Connected, None)
        };

        DataStoreReport {
            status,
            detail,
            url_configured,
            name_configured,
            collections: Vec::new(),
        }
    }
}
