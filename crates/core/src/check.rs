// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check verdicts: severity levels and the monotonic result accumulator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Risk level of an epic, ordered from no signal to blocked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Nothing known about the delivery.
    #[default]
    None,
    /// No impediment and confidence to deliver in time.
    Green,
    /// Minor impediments that could put the delivery at risk.
    Yellow,
    /// Major roadblocks; the delivery is not possible in time.
    Red,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::None => "NONE",
            CheckStatus::Green => "GREEN",
            CheckStatus::Yellow => "YELLOW",
            CheckStatus::Red => "RED",
        }
    }

    /// Recognizes a status comment such as `YELLOW: waiting on infra`.
    pub fn from_comment(body: &str) -> Option<CheckStatus> {
        [CheckStatus::Green, CheckStatus::Yellow, CheckStatus::Red]
            .into_iter()
            .find(|s| {
                body.strip_prefix(s.as_str())
                    .is_some_and(|rest| rest.starts_with(':'))
            })
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CheckStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(CheckStatus::None),
            "GREEN" => Ok(CheckStatus::Green),
            "YELLOW" => Ok(CheckStatus::Yellow),
            "RED" => Ok(CheckStatus::Red),
            _ => Err(Error::InvalidCheckStatus(s.to_string())),
        }
    }
}

/// Verdict accumulated by the checks for one epic.
///
/// `ready` can only go from true to false and `status` can only rise, so
/// the final verdict does not depend on the order the checks ran in. Only
/// `messages` keeps that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub ready: bool,
    pub status: CheckStatus,
    pub messages: Vec<String>,
}

impl Default for CheckResult {
    fn default() -> Self {
        CheckResult::new()
    }
}

impl CheckResult {
    /// A ready result with no status and no messages.
    pub fn new() -> Self {
        CheckResult {
            ready: true,
            status: CheckStatus::None,
            messages: Vec::new(),
        }
    }

    /// Merges readiness: once false, stays false.
    pub fn set_ready(&mut self, ready: bool) -> &mut Self {
        self.ready = self.ready && ready;
        self
    }

    /// Merges status: keeps the highest severity seen.
    pub fn set_status(&mut self, status: CheckStatus) -> &mut Self {
        self.status = self.status.max(status);
        self
    }

    pub fn add_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.messages.push(message.into());
        self
    }

    /// Messages in evaluation order, comma separated.
    pub fn messages_string(&self) -> String {
        self.messages.join(",")
    }

    /// Messages sorted alphabetically, for display.
    pub fn sorted_messages(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.messages.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
