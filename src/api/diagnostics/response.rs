// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Diagnostics response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datastore::DataStoreReport;

/// Response for GET /test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    /// Backend status, always "running" when the handler executes
    pub backend: String,
    /// Gateway version number
    pub version: String,
    /// Time the report was produced
    pub timestamp: DateTime<Utc>,
    /// Optional data-store availability report
    pub datastore: DataStoreReport,
}
