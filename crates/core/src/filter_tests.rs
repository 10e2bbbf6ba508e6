// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testing::{issue, resolved, story};
use yare::parameterized;

#[parameterized(
    story = { IssueType::Story, true },
    task = { IssueType::Task, true },
    bug = { IssueType::Bug, true },
    epic = { IssueType::Epic, false },
    initiative = { IssueType::Initiative, false },
)]
fn activity_filter(issue_type: IssueType, expected: bool) {
    let i = issue("PROJ-9", issue_type, Status::InProgress);
    assert_eq!(IssueFilter::activity().matches(&i), expected);
}

#[test]
fn component_filter_matches_exact_name() {
    let s = story("PROJ-2", Status::InProgress, None);
    assert!(IssueFilter::Component("Core".into()).matches(&s));
    assert!(!IssueFilter::Component("core".into()).matches(&s));
}

#[test]
fn not_negates_and_double_not_unwraps() {
    let f = IssueFilter::Obsolete.not();
    assert_eq!(f, IssueFilter::Not(Box::new(IssueFilter::Obsolete)));
    assert_eq!(f.not(), IssueFilter::Obsolete);
}

#[test]
fn and_flattens_into_all() {
    let f = IssueFilter::Active
        .and(IssueFilter::Impediment)
        .and(IssueFilter::NoComponents);
    assert!(matches!(f, IssueFilter::All(ref filters) if filters.len() == 3));
}

#[test]
fn and_requires_every_filter() {
    let mut s = story("PROJ-2", Status::InProgress, None);
    let f = IssueFilter::Active.and(IssueFilter::Impediment);
    assert!(!f.matches(&s));
    s.impediment = true;
    assert!(f.matches(&s));
}

#[test]
fn or_accepts_either_filter() {
    let f = IssueFilter::Active.or(IssueFilter::Done);
    assert!(f.matches(&story("PROJ-2", Status::CodeReview, None)));
    assert!(f.matches(&story("PROJ-3", Status::Done, None)));
    assert!(!f.matches(&story("PROJ-4", Status::from("New"), None)));
}

#[test]
fn empty_combinators() {
    let s = story("PROJ-2", Status::InProgress, None);
    assert!(IssueFilter::All(vec![]).matches(&s));
    assert!(!IssueFilter::Any(vec![]).matches(&s));
}

#[test]
fn project_filter() {
    let mut s = story("PROJ-2", Status::InProgress, None);
    assert!(IssueFilter::Project("PROJ".into()).matches(&s));
    s.project = "OTHER".into();
    assert!(!IssueFilter::Project("PROJ".into()).matches(&s));
}

#[test]
fn closures_are_predicates() {
    let s = story("PROJ-2", Status::InProgress, Some(5));
    let big = |i: &Issue| i.story_points.is_some_and(|p| p > 3);
    assert!(big.matches(&s));
}

#[parameterized(
    same = { Status::Done, true },
    other = { Status::InProgress, false },
    free_form = { Status::from("Review"), false },
)]
fn status_filter_matches_exact_status(status: Status, expected: bool) {
    let s = story("PROJ-2", status, None);
    assert_eq!(IssueFilter::Status(Status::Done).matches(&s), expected);
}

#[test]
fn resolved_filter_looks_at_resolution_not_status() {
    let done = story("PROJ-2", Status::Done, None);
    assert!(!IssueFilter::Resolved.matches(&done));
    assert!(IssueFilter::Resolved.matches(&resolved(story("PROJ-3", Status::InProgress, None))));
}
