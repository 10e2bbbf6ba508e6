// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::filter::IssueFilter;
use crate::issue::Status;
use crate::testing::{issue, resolved, story};

fn keys(c: &IssueCollection<'_>) -> Vec<String> {
    c.iter().map(|i| i.key.clone()).collect()
}

#[test]
fn filter_preserves_order() {
    let issues = vec![
        story("PROJ-5", Status::InProgress, None),
        issue("PROJ-3", IssueType::Task, Status::Done),
        story("PROJ-4", Status::CodeReview, None),
    ];
    let c = IssueCollection::new(&issues);
    let stories = c.filter(&IssueFilter::Type(IssueType::Story));
    assert_eq!(keys(&stories), vec!["PROJ-5", "PROJ-4"]);
}

#[test]
fn filter_with_no_match_is_empty() {
    let issues = vec![story("PROJ-2", Status::InProgress, None)];
    let c = IssueCollection::new(&issues);
    let bugs = c.filter(&IssueFilter::Type(IssueType::Bug));
    assert!(bugs.is_empty());
    assert_eq!(bugs.len(), 0);
}

#[test]
fn filter_accepts_closures() {
    let issues = vec![
        story("PROJ-2", Status::InProgress, Some(1)),
        story("PROJ-3", Status::InProgress, Some(8)),
    ];
    let c = IssueCollection::new(&issues);
    let big = c.filter(&|i: &Issue| i.story_points.unwrap_or(0) > 5);
    assert_eq!(keys(&big), vec!["PROJ-3"]);
}

#[test]
fn progress_counts_resolved_and_skips_obsolete() {
    let issues = vec![
        resolved(story("PROJ-2", Status::Done, Some(1))),
        story("PROJ-3", Status::InProgress, Some(2)),
        issue("PROJ-4", IssueType::Task, Status::Obsolete),
        resolved(issue("PROJ-5", IssueType::Bug, Status::Done)),
    ];
    let p = IssueCollection::new(&issues).progress();
    assert_eq!(
        p,
        Progress {
            completed: 2,
            total: 3,
            unknown: 0
        }
    );
}

#[test]
fn progress_uses_resolution_not_status() {
    // Done status without a Done resolution is not completed work.
    let issues = vec![story("PROJ-2", Status::Done, Some(1))];
    let p = IssueCollection::new(&issues).progress();
    assert_eq!(p.completed, 0);
    assert_eq!(p.total, 1);
}

#[test]
fn story_points_progress_only_counts_stories() {
    let mut task = issue("PROJ-6", IssueType::Task, Status::InProgress);
    task.story_points = Some(13);
    let issues = vec![
        resolved(story("PROJ-2", Status::Done, Some(3))),
        story("PROJ-3", Status::InProgress, Some(5)),
        story("PROJ-4", Status::InProgress, None),
        story("PROJ-5", Status::Obsolete, None),
        task,
    ];
    let p = IssueCollection::new(&issues).story_points_progress();
    assert_eq!(
        p,
        Progress {
            completed: 3,
            total: 8,
            unknown: 1
        }
    );
}

#[test]
fn story_points_zero_is_a_defined_estimate() {
    let issues = vec![story("PROJ-2", Status::InProgress, Some(0))];
    let p = IssueCollection::new(&issues).story_points_progress();
    assert_eq!(p.unknown, 0);
    assert_eq!(p.total, 0);
}

#[test]
fn progress_never_completes_more_than_total() {
    let issues = vec![
        resolved(story("PROJ-2", Status::Done, Some(2))),
        resolved(story("PROJ-3", Status::Obsolete, Some(4))),
        story("PROJ-4", Status::InProgress, None),
    ];
    let c = IssueCollection::new(&issues);
    for p in [c.progress(), c.story_points_progress()] {
        assert!(p.completed <= p.total, "{:?}", p);
    }
}

#[test]
fn story_points_saturate_instead_of_overflowing() {
    let issues = vec![
        resolved(story("PROJ-2", Status::Done, Some(3_000_000_000))),
        story("PROJ-3", Status::InProgress, Some(3_000_000_000)),
    ];
    let p = IssueCollection::new(&issues).story_points_progress();
    assert_eq!(p.total, u32::MAX);
    assert_eq!(p.completed, 3_000_000_000);
    assert!(p.completed <= p.total);
    assert!(!p.is_finished());
}

#[test]
fn story_points_saturated_and_resolved_is_finished() {
    let issues = vec![
        resolved(story("PROJ-2", Status::Done, Some(u32::MAX))),
        resolved(story("PROJ-3", Status::Done, Some(u32::MAX))),
    ];
    let p = IssueCollection::new(&issues).story_points_progress();
    assert_eq!(p.total, u32::MAX);
    assert_eq!(p.completed, u32::MAX);
    assert!(p.is_finished());
}

#[test]
fn count_and_any() {
    let issues = vec![
        story("PROJ-2", Status::InProgress, None),
        story("PROJ-3", Status::from("New"), None),
    ];
    let c = IssueCollection::new(&issues);
    assert_eq!(c.count(&IssueFilter::Active), 1);
    assert!(c.any(&IssueFilter::Active));
    assert!(!c.any(&IssueFilter::Done));
}
