// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Habitify import request, response and job status models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

/// Request body for a Habitify import.
///
/// Missing fields take their defaults, so `{}` parses and then fails
/// validation on `api_key`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "src/types/generated/")
)]
pub struct ImportHabitifyRequest {
    /// Habitify API key supplied by the user
    #[validate(length(min = 1, message = "api_key is required"))]
    pub api_key: String,
    pub import_habits: bool,
    pub import_logs: bool,
    pub import_areas: bool,
    /// Start of the log range (not validated)
    pub log_date_from: Option<String>,
    /// End of the log range (not validated)
    pub log_date_to: Option<String>,
}

/// Response for an accepted import request.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "src/types/generated/")
)]
pub struct ImportHabitifyResponse {
    pub job_id: String,
    pub status: ImportJobStatus,
    pub message: String,
}

impl ImportHabitifyResponse {
    pub const QUEUED_MESSAGE: &'static str = "Import job has been queued";

    /// A freshly queued job with a new opaque identifier.
    pub fn queued() -> Self {
        Self {
            job_id: new_job_id(),
            status: ImportJobStatus::Pending,
            message: Self::QUEUED_MESSAGE.to_string(),
        }
    }
}

/// Lifecycle of an import job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "src/types/generated/")
)]
pub enum ImportJobStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Progress report for an import job.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "src/types/generated/")
)]
pub struct ImportStatusResponse {
    pub job_id: String,
    pub status: ImportJobStatus,
    /// Overall progress, 0-100
    pub progress: u32,
    pub total_habits: u32,
    pub imported_habits: u32,
    pub total_logs: u32,
    pub imported_logs: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ImportStatusResponse {
    /// Zero-progress pending status for `job_id`.
    pub fn pending(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Default::default()
        }
    }
}

/// Generate an opaque job identifier (`job_` + 32 hex chars).
pub fn new_job_id() -> String {
    format!("job_{}", Uuid::new_v4().simple())
}
