// SPDX-License-Identifier: MIT
// Copyright 2026 The Habity Authors

//! Data models for the application.

pub mod import;

pub use import::{
    ImportHabitifyRequest, ImportHabitifyResponse, ImportJobStatus, ImportStatusResponse,
};
