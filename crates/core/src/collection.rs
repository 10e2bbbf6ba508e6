// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered issue collections and their aggregations.

use crate::filter::{IssueFilter, Predicate};
use crate::issue::{Issue, IssueType};
use crate::progress::Progress;

/// An ordered, borrowed selection of issues.
///
/// Filtering never copies issues; every derived collection points into the
/// same graph the provider resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueCollection<'a> {
    issues: Vec<&'a Issue>,
}

impl<'a> IssueCollection<'a> {
    pub fn new(issues: &'a [Issue]) -> Self {
        issues.iter().collect()
    }

    /// Returns the issues satisfying `predicate`, preserving their order.
    pub fn filter<P>(&self, predicate: &P) -> IssueCollection<'a>
    where
        P: Predicate + ?Sized,
    {
        self.iter().filter(|i| predicate.matches(i)).collect()
    }

    /// Counts the issues satisfying `predicate`.
    pub fn count<P>(&self, predicate: &P) -> usize
    where
        P: Predicate + ?Sized,
    {
        self.iter().filter(|i| predicate.matches(i)).count()
    }

    /// Returns true if any issue satisfies `predicate`.
    pub fn any<P>(&self, predicate: &P) -> bool
    where
        P: Predicate + ?Sized,
    {
        self.iter().any(|i| predicate.matches(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Issue> + '_ {
        self.issues.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue completion: every non-obsolete issue counts, resolved ones as completed.
    pub fn progress(&self) -> Progress {
        let mut progress = Progress::default();

        for issue in self.iter().filter(|i| !i.is_obsolete()) {
            progress.total = progress.total.saturating_add(1);
            if IssueFilter::Resolved.matches(issue) {
                progress.completed = progress.completed.saturating_add(1);
            }
        }

        progress
    }

    /// Story point completion over non-obsolete stories.
    ///
    /// Stories without an estimate are tallied in `unknown` and left out of
    /// the totals. Sums saturate at `u32::MAX`.
    pub fn story_points_progress(&self) -> Progress {
        let mut progress = Progress::default();

        for issue in self
            .iter()
            .filter(|i| !i.is_obsolete() && i.is_type(IssueType::Story))
        {
            match issue.story_points {
                Some(points) => {
                    progress.total = progress.total.saturating_add(points);
                    if IssueFilter::Resolved.matches(issue) {
                        progress.completed = progress.completed.saturating_add(points);
                    }
                }
                None => progress.unknown = progress.unknown.saturating_add(1),
            }
        }

        progress
    }
}

impl<'a> FromIterator<&'a Issue> for IssueCollection<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Issue>>(iter: I) -> Self {
        IssueCollection {
            issues: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
