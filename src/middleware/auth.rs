// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Supabase JWT identification middleware.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Audience Supabase stamps on access tokens for signed-in users.
pub const SUPABASE_AUDIENCE: &str = "authenticated";

/// JWT claims carried by a Supabase access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (Supabase user UUID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated user extracted from JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Verify a bearer token and return the user it identifies.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<AuthUser> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    // Checked against the raw claims, so `aud` may be a string or an array.
    validation.set_audience(&[SUPABASE_AUDIENCE]);

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|err| tracing::debug!(error = %err, "Rejected access token"))
        .ok()?;

    Some(AuthUser {
        user_id: token_data.claims.sub,
    })
}

/// Middleware that attaches an [`AuthUser`] when the request carries a
/// valid bearer token.
///
/// Requests without one pass through untouched; handlers that need an
/// identity reject them.
pub async fn identify_user(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(user) = token.and_then(|t| verify_token(t, state.config.jwt_secret.as_bytes())) {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}
