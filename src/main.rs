// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Habity API Server

use anyhow::Context;
use habity_backend::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(
        port = %config.port,
        supabase_url = %config.supabase_url,
        "Starting Habity API"
    );
    if config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET is unset; using the built-in placeholder secret");
    }
    if config.supabase_service_key.is_empty() {
        tracing::warn!("SUPABASE_SERVICE_KEY is unset");
    }

    let addr = config.bind_address();
    let state = Arc::new(AppState { config });
    let app = habity_backend::routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("habity_backend=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
