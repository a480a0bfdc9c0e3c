// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

use axum::body::Body;
use axum::http::Response;
use habity_backend::config::Config;
use habity_backend::routes::create_router;
use habity_backend::AppState;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Supabase-style user id.
#[allow(dead_code)]
pub const TEST_USER_ID: &str = "3f6c1b2e-8d4a-4c1e-9f0a-2b7d5e6c8a91";

/// Create a test app with default configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
    });

    (create_router(state.clone()), state)
}

/// Create a Supabase-style access token for `user_id`.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, secret: &str) -> String {
    create_test_jwt_with(user_id, secret, "authenticated", 3600)
}

/// Create a token with an explicit audience and lifetime (negative = expired).
#[allow(dead_code)]
pub fn create_test_jwt_with(user_id: &str, secret: &str, aud: &str, ttl_secs: i64) -> String {
    #[derive(Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        aud: &'a str,
        exp: usize,
        iat: usize,
        role: &'a str,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: user_id,
        aud,
        exp: (now + ttl_secs) as usize,
        iat: now as usize,
        role: "authenticated",
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
