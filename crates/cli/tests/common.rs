// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const URL: &str = "https://tracker.example.com";

pub fn epicsheet() -> Command {
    let mut cmd = cargo_bin_cmd!("epicsheet");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Snapshot fixture assembled issue by issue.
pub struct Fixture {
    pub temp: TempDir,
    issues: Vec<Value>,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            temp: TempDir::new().unwrap(),
            issues: Vec::new(),
        }
    }

    /// Adds an epic that passes every check, its market problem and one
    /// started story.
    pub fn clean_epic(mut self, key: &str, components: &[&str]) -> Self {
        self.issues.push(epic_json(key, components));
        self.issues.push(json!({
            "key": format!("{}00", key),
            "fields": {
                "issuetype": {"name": "Initiative"},
                "summary": "Market problem",
                "status": {"name": "In Progress"}
            }
        }));
        self.story(&format!("{}1", key), key, components, "In Progress")
    }

    pub fn story(mut self, key: &str, epic: &str, components: &[&str], status: &str) -> Self {
        self.issues.push(json!({
            "key": key,
            "fields": {
                "issuetype": {"name": "Story"},
                "summary": format!("Story {}", key),
                "status": {"name": status},
                "components": names(components),
                "customfield_2": epic,
                "customfield_3": 3
            }
        }));
        self
    }

    /// Adds an epic with nothing but a key, summary and status.
    pub fn bare_epic(mut self, key: &str) -> Self {
        self.issues.push(json!({
            "key": key,
            "fields": {
                "issuetype": {"name": "Epic"},
                "summary": format!("Epic {}", key),
                "status": {"name": "New"}
            }
        }));
        self
    }

    /// Writes the snapshot and returns its path.
    pub fn write(&self) -> PathBuf {
        let snapshot = json!({
            "fields": [
                {"id": "customfield_1", "name": "Parent Link"},
                {"id": "customfield_2", "name": "Epic Link"},
                {"id": "customfield_3", "name": "Story Points"},
                {"id": "customfield_4", "name": "5-Acks Check"},
                {"id": "customfield_5", "name": "QE Assignee"},
                {"id": "customfield_6", "name": "Acceptance Criteria"},
                {"id": "customfield_7", "name": "Flagged"},
                {"id": "customfield_8", "name": "Design Doc"},
                {"id": "customfield_9", "name": "Ready Check"},
                {"id": "customfield_10", "name": "Planning"}
            ],
            "issues": self.issues,
        });
        let path = self.temp.path().join("issues.json");
        std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();
        path
    }

    /// Writes a configuration file next to the snapshot.
    pub fn config(&self, toml: &str) -> PathBuf {
        let path = self.temp.path().join("epicsheet.toml");
        std::fs::write(&path, toml).unwrap();
        path
    }
}

fn names(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|v| json!({ "name": v })).collect())
}

fn options(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|v| json!({ "value": v })).collect())
}

fn epic_json(key: &str, components: &[&str]) -> Value {
    json!({
        "key": key,
        "fields": {
            "issuetype": {"name": "Epic"},
            "summary": format!("Epic {}", key),
            "description": "Scope.\n\nDelivery Owner: [~alice]\n",
            "status": {"name": "In Progress"},
            "priority": {"name": "Major"},
            "components": names(components),
            "fixVersions": [{"name": "2.0"}],
            "comment": {"comments": [
                {"body": "GREEN: on track",
                 "created": "2024-03-01T09:30:00.000+0000",
                 "updated": "2024-03-01T09:30:00.000+0000"}
            ]},
            "customfield_1": format!("{}00", key),
            "customfield_4": options(&["devel_ack", "pm_ack", "qa_ack", "ux_ack", "doc_ack"]),
            "customfield_5": {"key": "bob", "name": "Bob"},
            "customfield_6": "It ships",
            "customfield_8": "https://docs.example.com/design",
            "customfield_9": options(&["devel_ready", "pm_ready", "qa_ready", "ux_ready", "doc_ready", "support_ready"])
        }
    })
}
