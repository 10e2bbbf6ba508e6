// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn progress(completed: u32, total: u32, unknown: u32) -> Progress {
    Progress {
        completed,
        total,
        unknown,
    }
}

#[parameterized(
    empty = { progress(0, 0, 0), true },
    all_done = { progress(5, 5, 0), true },
    partial = { progress(2, 5, 0), false },
    unknown_does_not_count = { progress(3, 3, 2), true },
)]
fn progress_is_finished(p: Progress, expected: bool) {
    assert_eq!(p.is_finished(), expected);
}

#[test]
fn progress_remaining() {
    assert_eq!(progress(2, 5, 0).remaining(), 3);
    assert_eq!(progress(0, 0, 0).remaining(), 0);
}

#[test]
fn progress_percentage() {
    assert_eq!(progress(0, 0, 0).percentage(), None);
    let pct = progress(1, 4, 0).percentage().unwrap();
    assert!((pct - 0.25).abs() < f64::EPSILON);
}

#[parameterized(
    estimated = { progress(3, 8, 0), "3/8" },
    unsized_items = { progress(3, 8, 1), "3/8!" },
)]
fn progress_display(p: Progress, expected: &str) {
    assert_eq!(p.to_string(), expected);
}

#[test]
fn progress_serializes_all_counters() {
    let json = serde_json::to_value(progress(1, 2, 3)).unwrap();
    assert_eq!(json["completed"], 1);
    assert_eq!(json["total"], 2);
    assert_eq!(json["unknown"], 3);
}
