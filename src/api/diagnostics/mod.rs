// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Diagnostics endpoint module
//!
//! Provides GET /test. Purely informational, never fails.

pub mod handler;
pub mod response;

pub use handler::diagnostics_handler;
pub use response::DiagnosticsResponse;
