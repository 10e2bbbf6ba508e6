// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-epic derivation of completion metrics and status signals.
//!
//! An [`IssueAnalysis`] is built once per epic (and per scoping component)
//! and is read-only afterwards. The checks in [`crate::rules`] consume it.

use chrono::{DateTime, Utc};

use crate::check::{CheckResult, CheckStatus};
use crate::collection::IssueCollection;
use crate::filter::IssueFilter;
use crate::issue::Issue;
use crate::progress::Progress;
use crate::rules;

/// Metrics derived from an epic and its linked issues.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueAnalysis<'a> {
    /// The epic under assessment.
    pub issue: &'a Issue,
    /// Component the analysis is scoped to, if any.
    pub component: Option<&'a str>,
    /// Linked issues that are not obsolete, regardless of component.
    pub linked_issues: IssueCollection<'a>,
    /// Linked issues within the scoping component.
    pub scoped_issues: IssueCollection<'a>,
    pub issues_completion: Progress,
    pub points_completion: Progress,
    /// Stories, tasks and bugs in scope.
    pub num_activities: usize,
    /// Some same-project linked issue has no component assigned.
    pub issue_no_component: bool,
    /// Highest status signaled through comments in scope.
    pub comment_status: CheckStatus,
    /// When the winning status comment was last updated.
    pub comment_date: Option<DateTime<Utc>>,
}

impl<'a> IssueAnalysis<'a> {
    /// Analyzes `issue`, optionally restricted to one component.
    ///
    /// An empty component name is treated as no component.
    pub fn new(issue: &'a Issue, component: Option<&'a str>) -> Self {
        let component = component.filter(|c| !c.is_empty());

        let linked_issues =
            IssueCollection::new(&issue.linked_issues).filter(&IssueFilter::Obsolete.not());

        let scoped_issues = match component {
            Some(name) => linked_issues.filter(&IssueFilter::Component(name.to_string())),
            None => linked_issues.clone(),
        };

        let issue_no_component = linked_issues.any(
            &IssueFilter::Project(issue.project.clone()).and(IssueFilter::NoComponents),
        );

        let (comment_status, comment_date) = scan_comments(scoped_issues.iter().chain([issue]));

        IssueAnalysis {
            issue,
            component,
            issues_completion: scoped_issues.progress(),
            points_completion: scoped_issues.story_points_progress(),
            num_activities: scoped_issues.count(&IssueFilter::activity()),
            issue_no_component,
            comment_status,
            comment_date,
            linked_issues,
            scoped_issues,
        }
    }

    /// Runs every check against this analysis.
    pub fn check(&self) -> CheckResult {
        rules::evaluate(self)
    }

    /// Returns true if the epic or any non-obsolete linked issue is impeded.
    pub fn impediment(&self) -> bool {
        self.issue.impediment || self.linked_issues.any(&IssueFilter::Impediment)
    }

    /// Returns true if some issue in scope is being worked on or finished.
    pub fn has_started_issues(&self) -> bool {
        self.scoped_issues
            .any(&IssueFilter::Active.or(IssueFilter::Done))
    }
}

/// Returns the status signaled by the most recent status comment of `issue`.
///
/// Comments are walked newest first; the first one starting with `GREEN:`,
/// `YELLOW:` or `RED:` decides, older comments are ignored.
pub fn comment_status(issue: &Issue) -> Option<(CheckStatus, DateTime<Utc>)> {
    issue
        .comments
        .iter()
        .rev()
        .find_map(|c| CheckStatus::from_comment(&c.body).map(|s| (s, c.updated)))
}

/// Keeps the most severe comment status; the first issue wins ties.
fn scan_comments<'a>(
    issues: impl Iterator<Item = &'a Issue>,
) -> (CheckStatus, Option<DateTime<Utc>>) {
    let mut status = CheckStatus::None;
    let mut date = None;

    for (found, updated) in issues.filter_map(comment_status) {
        if found > status {
            status = found;
            date = Some(updated);
        }
    }

    (status, date)
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
