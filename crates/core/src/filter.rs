// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composable issue predicates.
//!
//! Filters are plain values, so they can be built once, combined, logged and
//! reused by the analysis and by report selection alike:
//!
//! ```
//! use es_core::{IssueFilter, IssueType};
//!
//! let open_stories = IssueFilter::Type(IssueType::Story)
//!     .and(IssueFilter::Done.not())
//!     .and(IssueFilter::Obsolete.not());
//! # let _ = open_stories;
//! ```

use crate::issue::{Issue, IssueType, Status};

/// Anything that can decide whether an issue belongs to a selection.
///
/// Implemented for [`IssueFilter`] and for any `Fn(&Issue) -> bool`.
pub trait Predicate {
    fn matches(&self, issue: &Issue) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Issue) -> bool,
{
    fn matches(&self, issue: &Issue) -> bool {
        self(issue)
    }
}

/// A predicate over a single issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFilter {
    /// Issue is of the given type.
    Type(IssueType),
    /// Issue is in exactly the given status.
    Status(Status),
    /// Issue is in one of the active statuses.
    Active,
    /// Issue status is Done.
    Done,
    /// Issue status is Obsolete.
    Obsolete,
    /// Issue resolution is Done.
    Resolved,
    /// Issue carries the named component.
    Component(String),
    /// Issue has no component at all.
    NoComponents,
    /// Issue belongs to the given project.
    Project(String),
    /// Issue is flagged as impeded.
    Impediment,
    Not(Box<IssueFilter>),
    /// Every inner filter matches (an empty list matches everything).
    All(Vec<IssueFilter>),
    /// At least one inner filter matches (an empty list matches nothing).
    Any(Vec<IssueFilter>),
}

impl IssueFilter {
    /// Stories, tasks and bugs.
    pub fn activity() -> Self {
        IssueFilter::Any(vec![
            IssueFilter::Type(IssueType::Story),
            IssueFilter::Type(IssueType::Task),
            IssueFilter::Type(IssueType::Bug),
        ])
    }

    /// Any of the given types.
    pub fn types(types: &[IssueType]) -> Self {
        IssueFilter::Any(types.iter().copied().map(IssueFilter::Type).collect())
    }

    /// Negates this filter.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            IssueFilter::Not(inner) => *inner,
            other => IssueFilter::Not(Box::new(other)),
        }
    }

    /// Matches when both filters match.
    pub fn and(self, other: IssueFilter) -> Self {
        match self {
            IssueFilter::All(mut filters) => {
                filters.push(other);
                IssueFilter::All(filters)
            }
            first => IssueFilter::All(vec![first, other]),
        }
    }

    /// Matches when either filter matches.
    pub fn or(self, other: IssueFilter) -> Self {
        match self {
            IssueFilter::Any(mut filters) => {
                filters.push(other);
                IssueFilter::Any(filters)
            }
            first => IssueFilter::Any(vec![first, other]),
        }
    }
}

impl Predicate for IssueFilter {
    fn matches(&self, issue: &Issue) -> bool {
        match self {
            IssueFilter::Type(t) => issue.is_type(*t),
            IssueFilter::Status(s) => issue.status == *s,
            IssueFilter::Active => issue.is_active(),
            IssueFilter::Done => issue.is_done(),
            IssueFilter::Obsolete => issue.is_obsolete(),
            IssueFilter::Resolved => issue.is_resolved(),
            IssueFilter::Component(name) => issue.has_component(name),
            IssueFilter::NoComponents => issue.components.is_empty(),
            IssueFilter::Project(key) => issue.project == *key,
            IssueFilter::Impediment => issue.impediment,
            IssueFilter::Not(inner) => !inner.matches(issue),
            IssueFilter::All(filters) => filters.iter().all(|f| f.matches(issue)),
            IssueFilter::Any(filters) => filters.iter().any(|f| f.matches(issue)),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
