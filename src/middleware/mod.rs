// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Middleware modules (identification, security headers).

pub mod auth;
pub mod security;

pub use auth::{identify_user, AuthUser};
