// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the epicsheet library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("profile not found: '{id}'\n  hint: available profiles are: {available}")]
    ProfileNotFound { id: String, available: String },

    #[error("{field} is required\n  hint: {hint}")]
    FieldRequired {
        field: &'static str,
        hint: &'static str,
    },

    #[error("unknown component '{0}'\n  hint: no selected epic declares this component")]
    UnknownComponent(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] es_core::Error),
}

/// A specialized Result type for epicsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
