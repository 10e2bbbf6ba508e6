// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for epic assessment.
//!
//! This module contains the resolved issue graph handed to the analysis
//! engine: Issue, IssueType, Status, Comment and the sign-off flag sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Resolution name marking an issue as completed.
pub const RESOLUTION_DONE: &str = "Done";

/// Priority name used by the tracker for issues nobody has triaged.
pub const PRIORITY_UNPRIORITIZED: &str = "Unprioritized";

/// Classification of issues by their nature and scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    /// Market problem or initiative grouping several epics.
    Initiative,
    /// Top-level deliverable aggregating stories, tasks and bugs.
    Epic,
    /// User-facing unit of work, sized in story points.
    Story,
    /// Standard unit of work.
    Task,
    /// Defect or problem to fix.
    Bug,
}

impl IssueType {
    /// Returns the name used by the tracker.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Initiative => "Initiative",
            IssueType::Epic => "Epic",
            IssueType::Story => "Story",
            IssueType::Task => "Task",
            IssueType::Bug => "Bug",
        }
    }

    /// Returns true for the types counted as activities of an epic.
    pub fn is_activity(&self) -> bool {
        matches!(self, IssueType::Story | IssueType::Task | IssueType::Bug)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "initiative" | "market problem" => Ok(IssueType::Initiative),
            "epic" => Ok(IssueType::Epic),
            "story" => Ok(IssueType::Story),
            "task" => Ok(IssueType::Task),
            "bug" => Ok(IssueType::Bug),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
///
/// Status names are free-form in the tracker. The ones the checks care about
/// get their own variant, everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    InProgress,
    FeatureComplete,
    CodeReview,
    QeReview,
    Done,
    /// Withdrawn; ignored by every aggregation.
    Obsolete,
    Other(String),
}

impl Status {
    /// Returns the status name used by the tracker.
    pub fn as_str(&self) -> &str {
        match self {
            Status::InProgress => "In Progress",
            Status::FeatureComplete => "Feature Complete",
            Status::CodeReview => "Code Review",
            Status::QeReview => "QE Review",
            Status::Done => "Done",
            Status::Obsolete => "Obsolete",
            Status::Other(name) => name,
        }
    }

    /// Returns true while the issue is being worked on.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Status::InProgress | Status::FeatureComplete | Status::CodeReview | Status::QeReview
        )
    }
}

impl From<&str> for Status {
    fn from(name: &str) -> Self {
        match name {
            "In Progress" => Status::InProgress,
            "Feature Complete" => Status::FeatureComplete,
            "Code Review" => Status::CodeReview,
            "QE Review" => Status::QeReview,
            "Done" => Status::Done,
            "Obsolete" => Status::Obsolete,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(name: String) -> Self {
        Status::from(name.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A comment attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Per-discipline acknowledgments gating commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approvals {
    pub development: bool,
    pub product: bool,
    pub quality: bool,
    pub experience: bool,
    pub documentation: bool,
}

impl Approvals {
    /// Every discipline acknowledged.
    pub fn all() -> Self {
        Approvals {
            development: true,
            product: true,
            quality: true,
            experience: true,
            documentation: true,
        }
    }

    /// Returns true if all approvals are set.
    pub fn approved(&self) -> bool {
        self.development && self.product && self.quality && self.experience && self.documentation
    }
}

/// Per-discipline grooming sign-offs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub development: bool,
    pub product: bool,
    pub quality: bool,
    pub experience: bool,
    pub documentation: bool,
    pub support: bool,
}

impl Readiness {
    /// Every discipline signed off.
    pub fn all() -> Self {
        Readiness {
            development: true,
            product: true,
            quality: true,
            experience: true,
            documentation: true,
            support: true,
        }
    }

    /// Returns true if all readiness flags are set.
    pub fn ready(&self) -> bool {
        self.development
            && self.product
            && self.quality
            && self.experience
            && self.documentation
            && self.support
    }
}

/// Planning opt-outs declared on an epic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planning {
    /// Not a feature: no design document expected.
    pub no_feature: bool,
    /// No quality engineering involvement planned.
    pub no_quality: bool,
    /// No documentation work planned.
    pub no_documentation: bool,
}

/// An issue as resolved by the provider, including its linked issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker key (format: `{project}-{number}`).
    pub key: String,
    /// Key of the project owning the issue.
    pub project: String,
    pub issue_type: IssueType,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub components: Vec<String>,
    pub fix_versions: Vec<String>,
    /// Comments in creation order, oldest first.
    pub comments: Vec<Comment>,
    /// Story points; `None` when nobody estimated the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    /// Delivery owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qe_assignee: Option<String>,
    /// Acceptance criteria text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance: Option<String>,
    /// Design document reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_doc: Option<String>,
    pub readiness: Readiness,
    pub planning: Planning,
    pub approvals: Approvals,
    pub impediment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_link: Option<String>,
    /// The initiative this issue contributes to, when resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_problem: Option<Box<Issue>>,
    /// Child issues linked to this one.
    pub linked_issues: Vec<Issue>,
    /// Browse URL.
    pub link: String,
}

impl Issue {
    /// Creates an issue with every optional field unset.
    pub fn new(
        key: impl Into<String>,
        project: impl Into<String>,
        issue_type: IssueType,
        status: Status,
    ) -> Self {
        Issue {
            key: key.into(),
            project: project.into(),
            issue_type,
            summary: String::new(),
            description: None,
            status,
            priority: None,
            resolution: None,
            components: Vec::new(),
            fix_versions: Vec::new(),
            comments: Vec::new(),
            story_points: None,
            owner: None,
            qe_assignee: None,
            acceptance: None,
            design_doc: None,
            readiness: Readiness::default(),
            planning: Planning::default(),
            approvals: Approvals::default(),
            impediment: false,
            parent_link: None,
            epic_link: None,
            market_problem: None,
            linked_issues: Vec::new(),
            link: String::new(),
        }
    }

    pub fn is_type(&self, issue_type: IssueType) -> bool {
        self.issue_type == issue_type
    }

    pub fn is_epic(&self) -> bool {
        self.is_type(IssueType::Epic)
    }

    /// Returns true if the issue is currently worked on.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true if the issue status is Done.
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    pub fn is_obsolete(&self) -> bool {
        self.status == Status::Obsolete
    }

    /// Returns true if the issue resolution is Done.
    pub fn is_resolved(&self) -> bool {
        self.resolution.as_deref() == Some(RESOLUTION_DONE)
    }

    /// Returns true if someone set a real priority on the issue.
    pub fn is_prioritized(&self) -> bool {
        match self.priority.as_deref() {
            None | Some("") | Some(PRIORITY_UNPRIORITIZED) => false,
            Some(_) => true,
        }
    }

    pub fn has_component(&self, component: &str) -> bool {
        self.components.iter().any(|c| c == component)
    }

    pub fn has_description(&self) -> bool {
        is_set(self.description.as_deref())
    }

    pub fn has_owner(&self) -> bool {
        is_set(self.owner.as_deref())
    }

    pub fn has_qe_assignee(&self) -> bool {
        is_set(self.qe_assignee.as_deref())
    }

    pub fn has_acceptance(&self) -> bool {
        is_set(self.acceptance.as_deref())
    }

    pub fn has_design_doc(&self) -> bool {
        is_set(self.design_doc.as_deref())
    }

    pub fn has_epic_link(&self) -> bool {
        is_set(self.epic_link.as_deref())
    }
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
