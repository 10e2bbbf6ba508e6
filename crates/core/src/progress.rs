// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion counters produced by the collection aggregators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a series of activities.
///
/// `completed` never exceeds `total`. `unknown` counts items left out of
/// `total` because they lack the data needed to size them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub unknown: u32,
}

impl Progress {
    /// Returns true when every counted item is completed.
    pub fn is_finished(&self) -> bool {
        self.completed == self.total
    }

    /// Returns true when no item was left out of the total.
    pub fn is_estimated(&self) -> bool {
        self.unknown == 0
    }

    /// Returns the number of items remaining.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }

    /// Returns the completed fraction, or `None` when nothing was counted.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(f64::from(self.completed) / f64::from(self.total))
    }
}

impl fmt::Display for Progress {
    /// Formats as `completed/total`, with a trailing `!` when items are unsized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)?;
        if !self.is_estimated() {
            write!(f, "!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
