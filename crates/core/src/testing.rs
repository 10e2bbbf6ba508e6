// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue builders shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::issue::{Approvals, Comment, Issue, IssueType, Readiness, Status};

pub(crate) const PROJECT: &str = "PROJ";

pub(crate) fn issue(key: &str, issue_type: IssueType, status: Status) -> Issue {
    let mut issue = Issue::new(key, PROJECT, issue_type, status);
    issue.summary = format!("{} {}", issue_type, key);
    issue.link = format!("https://tracker.example.com/browse/{}", key);
    issue
}

pub(crate) fn story(key: &str, status: Status, points: Option<u32>) -> Issue {
    let mut story = issue(key, IssueType::Story, status);
    story.story_points = points;
    story.components = vec!["Core".to_string()];
    story.epic_link = Some("PROJ-1".to_string());
    story
}

pub(crate) fn resolved(mut issue: Issue) -> Issue {
    issue.resolution = Some("Done".to_string());
    issue
}

pub(crate) fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub(crate) fn comment(body: &str, on: u32) -> Comment {
    Comment {
        body: body.to_string(),
        created: day(on),
        updated: day(on),
    }
}

/// An in-progress epic that passes every check, with a green status comment.
pub(crate) fn clean_epic() -> Issue {
    let mut epic = issue("PROJ-1", IssueType::Epic, Status::InProgress);
    epic.description = Some("Ship the thing".to_string());
    epic.priority = Some("Major".to_string());
    epic.components = vec!["Core".to_string()];
    epic.fix_versions = vec!["2.0".to_string()];
    epic.owner = Some("alice".to_string());
    epic.qe_assignee = Some("bob".to_string());
    epic.acceptance = Some("It ships".to_string());
    epic.design_doc = Some("https://docs.example.com/design".to_string());
    epic.readiness = Readiness::all();
    epic.approvals = Approvals::all();
    epic.parent_link = Some("PROJ-100".to_string());
    epic.market_problem = Some(Box::new(issue(
        "PROJ-100",
        IssueType::Initiative,
        Status::InProgress,
    )));
    epic.comments = vec![comment("GREEN: on track", 1)];
    epic.linked_issues = vec![story("PROJ-2", Status::InProgress, Some(3))];
    epic
}
