// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Habity backend: HTTP API for the Habity habit tracker.
//!
//! Currently serves the Habitify import endpoints, which accept import
//! requests and report job status but do not yet perform the import.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
