// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for es-core operations.
//!
//! The analysis and check engine never fail; every variant here belongs to
//! the snapshot provider boundary, where malformed input is rejected before
//! any epic is evaluated.

use thiserror::Error;

/// All possible errors that can occur in es-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid issue type: '{0}'\n  hint: valid types are: Initiative, Epic, Story, Task, Bug"
    )]
    InvalidIssueType(String),

    #[error("issue {issue} is missing required field '{field}'")]
    MissingField { issue: String, field: &'static str },

    #[error("issue {issue} has an invalid '{field}' value: {reason}")]
    InvalidFieldValue {
        issue: String,
        field: String,
        reason: String,
    },

    #[error("invalid timestamp '{value}' on issue {issue}")]
    InvalidTimestamp { issue: String, value: String },

    #[error("invalid check status: '{0}'\n  hint: valid statuses are: NONE, GREEN, YELLOW, RED")]
    InvalidCheckStatus(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for es-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
