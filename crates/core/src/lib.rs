// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! es-core: epic readiness analysis and checks
//!
//! This crate provides the resolved issue model, the snapshot provider that
//! builds it, and the analysis and check engine used by the epicsheet CLI.

pub mod analysis;
pub mod check;
pub mod collection;
pub mod error;
pub mod fields;
pub mod filter;
pub mod issue;
pub mod progress;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod testing;

pub use analysis::IssueAnalysis;
pub use check::{CheckResult, CheckStatus};
pub use collection::IssueCollection;
pub use error::{Error, Result};
pub use fields::{CustomField, FieldDecl, FieldMap, FieldNames};
pub use filter::{IssueFilter, Predicate};
pub use issue::{Approvals, Comment, Issue, IssueType, Planning, Readiness, Status};
pub use progress::Progress;
pub use rules::{Effect, Rule, StatusEffect, RULES};
pub use snapshot::{Provider, Snapshot};
