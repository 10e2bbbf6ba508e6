// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot provider: decodes a tracker search export into resolved epics.
//!
//! A snapshot is the JSON produced by the tracker's search API, together
//! with the instance field declarations:
//!
//! ```json
//! { "fields": [{"id": "customfield_10", "name": "Story Points"}],
//!   "issues": [{"key": "PROJ-1", "fields": {"issuetype": {"name": "Epic"}}}] }
//! ```
//!
//! The [`Provider`] turns raw issues into [`Issue`] values and attaches to
//! each selected epic its linked issues and its market problem. Everything
//! downstream works on that resolved graph and never sees raw JSON.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::fields::{CustomField, FieldDecl, FieldMap};
use crate::filter::Predicate;
use crate::issue::{Approvals, Comment, Issue, IssueType, Planning, Readiness, Status};

/// Timestamp layout used by the tracker, e.g. `2024-03-01T09:30:00.000+0100`.
pub const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Flag value marking an issue as impeded.
const FLAG_IMPEDIMENT: &str = "Impediment";

// Delivery owner mention in a description, e.g. `Delivery Owner: [~jdoe]`.
// Using match with unreachable! since the pattern is hard-coded and known-valid.
static DELIVERY_OWNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\W*(Delivery Owner|DELIVERY OWNER)\W*:\W*\[~([a-zA-Z0-9]*)\]") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// A tracker search export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// Field declarations of the instance.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    pub issues: Vec<RawIssue>,
}

impl Snapshot {
    /// Reads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(
            "loaded {} issues from {}",
            snapshot.issues.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Parses a snapshot from a JSON string.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An issue as returned by the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub key: String,
    pub fields: RawFields,
}

/// Standard fields are typed; custom fields are kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFields {
    pub issuetype: Named,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Named,
    #[serde(default)]
    pub priority: Option<Named>,
    #[serde(default)]
    pub resolution: Option<Named>,
    #[serde(default)]
    pub components: Vec<Named>,
    #[serde(default, rename = "fixVersions")]
    pub fix_versions: Vec<Named>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub comment: Option<CommentPage>,
    #[serde(flatten)]
    pub custom: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub body: String,
    pub created: String,
    pub updated: String,
}

/// Decodes snapshots into resolved issues.
#[derive(Debug, Clone)]
pub struct Provider {
    base_url: String,
    fields: FieldMap,
}

impl Provider {
    /// Creates a provider for the instance at `base_url`.
    pub fn new(base_url: &str, fields: FieldMap) -> Self {
        Provider {
            base_url: base_url.trim_end_matches('/').to_string(),
            fields,
        }
    }

    /// Returns the browse URL of an issue.
    pub fn link(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    /// Decodes one raw issue, without its linked issues.
    pub fn decode(&self, raw: &RawIssue) -> Result<Issue> {
        let f = &raw.fields;

        let issue_type: IssueType = f.issuetype.name.parse()?;
        let project = match (&f.project, raw.key.rsplit_once('-')) {
            (Some(project), _) => project.key.clone(),
            (None, Some((prefix, _))) => prefix.to_string(),
            (None, None) => {
                return Err(Error::MissingField {
                    issue: raw.key.clone(),
                    field: "project",
                })
            }
        };

        let mut issue = Issue::new(
            raw.key.as_str(),
            project,
            issue_type,
            Status::from(f.status.name.as_str()),
        );
        issue.summary = f.summary.clone();
        issue.description = f.description.clone();
        issue.priority = f.priority.as_ref().map(|p| p.name.clone());
        issue.resolution = f.resolution.as_ref().map(|r| r.name.clone());
        issue.components = f.components.iter().map(|c| c.name.clone()).collect();
        issue.fix_versions = f.fix_versions.iter().map(|v| v.name.clone()).collect();
        issue.comments = decode_comments(&raw.key, f.comment.as_ref())?;
        issue.owner = delivery_owner(f.description.as_deref())
            .or_else(|| f.assignee.as_ref().and_then(|a| a.name.clone()));
        issue.link = self.link(&raw.key);

        let custom = CustomValues {
            key: &raw.key,
            fields: &self.fields,
            values: &f.custom,
        };
        issue.story_points = custom.points(CustomField::StoryPoints)?;
        issue.parent_link = custom.string(CustomField::ParentLink)?;
        issue.epic_link = custom.string(CustomField::EpicLink)?;
        issue.acceptance = custom.string(CustomField::Acceptance)?;
        issue.design_doc = custom.string(CustomField::DesignDoc)?;
        issue.qe_assignee = custom.user(CustomField::QeAssignee)?;
        issue.impediment = custom
            .options(CustomField::Flagged)?
            .contains(&FLAG_IMPEDIMENT);

        let mut approvals = Approvals::default();
        for value in custom.options(CustomField::Approvals)? {
            match value {
                "devel_ack" => approvals.development = true,
                "pm_ack" => approvals.product = true,
                "qa_ack" => approvals.quality = true,
                "ux_ack" => approvals.experience = true,
                "doc_ack" => approvals.documentation = true,
                _ => {}
            }
        }
        issue.approvals = approvals;

        let mut readiness = Readiness::default();
        for value in custom.options(CustomField::Readiness)? {
            match value {
                "devel_ready" => readiness.development = true,
                "pm_ready" => readiness.product = true,
                "qa_ready" => readiness.quality = true,
                "ux_ready" => readiness.experience = true,
                "doc_ready" => readiness.documentation = true,
                "support_ready" => readiness.support = true,
                _ => {}
            }
        }
        issue.readiness = readiness;

        let mut planning = Planning::default();
        for value in custom.options(CustomField::Planning)? {
            match value {
                "no_feature" => planning.no_feature = true,
                "no_qe" => planning.no_quality = true,
                "no_doc" => planning.no_documentation = true,
                _ => {}
            }
        }
        issue.planning = planning;

        Ok(issue)
    }

    /// Decodes every issue of the snapshot, in snapshot order.
    pub fn issues(&self, snapshot: &Snapshot) -> Result<Vec<Issue>> {
        snapshot.issues.iter().map(|raw| self.decode(raw)).collect()
    }

    /// Returns the issues matching `select`, each resolved with its linked
    /// issues (ordered by key) and its market problem.
    pub fn epics<P>(&self, snapshot: &Snapshot, select: &P) -> Result<Vec<Issue>>
    where
        P: Predicate + ?Sized,
    {
        let issues = self.issues(snapshot)?;

        let mut by_key: HashMap<&str, &Issue> = HashMap::new();
        let mut children: HashMap<&str, Vec<&Issue>> = HashMap::new();
        for issue in &issues {
            by_key.insert(issue.key.as_str(), issue);
            if let Some(epic) = issue.epic_link.as_deref() {
                children.entry(epic).or_default().push(issue);
            }
        }

        let mut epics = Vec::new();
        for issue in issues.iter().filter(|i| select.matches(i)) {
            let mut epic = issue.clone();

            let mut linked = children.get(epic.key.as_str()).cloned().unwrap_or_default();
            linked.sort_by(|a, b| key_order(&a.key, &b.key));
            epic.linked_issues = linked.into_iter().cloned().collect();

            if let Some(parent) = epic.parent_link.as_deref().filter(|p| !p.is_empty()) {
                match by_key.get(parent) {
                    Some(problem) => epic.market_problem = Some(Box::new((*problem).clone())),
                    None => tracing::warn!(
                        "{}: parent link {} is not in the snapshot",
                        epic.key,
                        parent
                    ),
                }
            }

            tracing::debug!(
                "resolved {} with {} linked issues",
                epic.key,
                epic.linked_issues.len()
            );
            epics.push(epic);
        }

        tracing::info!(
            "selected {} epics out of {} issues",
            epics.len(),
            issues.len()
        );
        Ok(epics)
    }
}

/// Orders issue keys by project, then numerically by issue number.
pub fn key_order(a: &str, b: &str) -> Ordering {
    match (split_key(a), split_key(b)) {
        (Some((pa, na)), Some((pb, nb))) => pa.cmp(pb).then(na.cmp(&nb)),
        _ => a.cmp(b),
    }
}

fn split_key(key: &str) -> Option<(&str, u64)> {
    let (project, number) = key.rsplit_once('-')?;
    Some((project, number.parse().ok()?))
}

/// Extracts the delivery owner mentioned in a description.
fn delivery_owner(description: Option<&str>) -> Option<String> {
    DELIVERY_OWNER_RE
        .captures(description?)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
}

fn decode_comments(key: &str, page: Option<&CommentPage>) -> Result<Vec<Comment>> {
    let Some(page) = page else {
        return Ok(Vec::new());
    };

    page.comments
        .iter()
        .map(|c| -> Result<Comment> {
            Ok(Comment {
                body: c.body.clone(),
                created: parse_time(key, &c.created)?,
                updated: parse_time(key, &c.updated)?,
            })
        })
        .collect()
}

/// Parses a tracker timestamp.
pub fn parse_time(key: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(value, TIME_LAYOUT)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp {
            issue: key.to_string(),
            value: value.to_string(),
        })
}

// Typed access to the custom fields of one raw issue.
struct CustomValues<'a> {
    key: &'a str,
    fields: &'a FieldMap,
    values: &'a HashMap<String, Value>,
}

impl<'a> CustomValues<'a> {
    // Unmapped, absent and null fields all read as None.
    fn get(&self, field: CustomField) -> Option<&'a Value> {
        let id = self.fields.id(field)?;
        self.values.get(id).filter(|v| !v.is_null())
    }

    fn invalid(&self, field: CustomField, reason: &str) -> Error {
        let name = self
            .fields
            .decl(field)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        Error::InvalidFieldValue {
            issue: self.key.to_string(),
            field: name,
            reason: reason.to_string(),
        }
    }

    fn string(&self, field: CustomField) -> Result<Option<String>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.invalid(field, "expected a string")),
        }
    }

    fn points(&self, field: CustomField) -> Result<Option<u32>> {
        match self.get(field).map(Value::as_f64) {
            None => Ok(None),
            Some(Some(n)) if (0.0..=f64::from(u32::MAX)).contains(&n) => Ok(Some(n as u32)),
            Some(_) => Err(self.invalid(field, "expected a non-negative number")),
        }
    }

    // A user object, identified by key or else by name.
    fn user(&self, field: CustomField) -> Result<Option<String>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let user: User = serde_json::from_value(value.clone())
            .map_err(|_| self.invalid(field, "expected a user"))?;
        Ok(user.key.or(user.name))
    }

    // Values of a multi-select field such as `[{"value": "qa_ack"}]`.
    fn options(&self, field: CustomField) -> Result<Vec<&'a str>> {
        let Some(value) = self.get(field) else {
            return Ok(Vec::new());
        };
        let Some(items) = value.as_array() else {
            return Err(self.invalid(field, "expected a list of options"));
        };
        items
            .iter()
            .map(|item| {
                item.get("value")
                    .and_then(Value::as_str)
                    .ok_or_else(|| self.invalid(field, "expected an option value"))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
