// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Habitify import routes.
//!
//! Both handlers are placeholders: an accepted request is answered with a
//! queued job, but nothing fetches from Habitify or records the job, and
//! every status lookup reports a pending job with no progress.

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{ImportHabitifyRequest, ImportHabitifyResponse, ImportStatusResponse};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// Import routes. Identity is resolved by the middleware in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/import/habitify", post(import_habitify))
        .route("/api/import/habitify/", get(missing_job_id))
        .route("/api/import/habitify/{job_id}", get(get_import_status))
}

/// Queue a Habitify import for the calling user.
async fn import_habitify(
    State(_state): State<Arc<AppState>>,
    user: Option<Extension<AuthUser>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ImportHabitifyResponse>)> {
    let user_id = user.map(|Extension(u)| u.user_id).unwrap_or_default();
    let response = queue_import(&user_id, &body)?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Validate an import request for `user_id` (empty means anonymous).
pub fn queue_import(user_id: &str, body: &[u8]) -> Result<ImportHabitifyResponse> {
    if user_id.is_empty() {
        return Err(AppError::Unauthorized);
    }

    let req: ImportHabitifyRequest = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("invalid request body".to_string()))?;
    req.validate()
        .map_err(|_| AppError::BadRequest("api_key is required".to_string()))?;

    let response = ImportHabitifyResponse::queued();
    tracing::info!(
        user_id = %user_id,
        job_id = %response.job_id,
        import_habits = req.import_habits,
        import_logs = req.import_logs,
        import_areas = req.import_areas,
        "Habitify import queued"
    );

    Ok(response)
}

/// Report the status of an import job.
async fn get_import_status(Path(job_id): Path<String>) -> Result<Json<ImportStatusResponse>> {
    import_status(&job_id).map(Json)
}

/// Status lookup with an empty job id segment.
async fn missing_job_id() -> Result<Json<ImportStatusResponse>> {
    import_status("").map(Json)
}

/// Status for `job_id`. Identifiers are not checked against issued jobs.
pub fn import_status(job_id: &str) -> Result<ImportStatusResponse> {
    if job_id.is_empty() {
        return Err(AppError::BadRequest("job_id is required".to_string()));
    }
    Ok(ImportStatusResponse::pending(job_id))
}
