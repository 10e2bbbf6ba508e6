// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use es_core::{CheckResult, CheckStatus, Issue, IssueAnalysis, Progress};

use crate::cli::{OutputFormat, SourceArgs};
use crate::colors;
use crate::components::ComponentGroups;
use crate::error::{Error, Result};

use super::{evaluate, load};

/// Verdict of one epic, as printed by `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub key: String,
    pub summary: String,
    pub ready: bool,
    pub status: CheckStatus,
    pub messages: Vec<String>,
    pub issues: Progress,
    pub points: Progress,
    /// Share of estimated story points completed.
    pub completion: Option<f64>,
    pub comment_date: Option<DateTime<Utc>>,
}

impl Verdict {
    fn new(analysis: &IssueAnalysis<'_>, result: &CheckResult) -> Self {
        Verdict {
            key: analysis.issue.key.clone(),
            summary: analysis.issue.summary.clone(),
            ready: result.ready,
            status: result.status,
            messages: result.messages.clone(),
            issues: analysis.issues_completion,
            points: analysis.points_completion,
            completion: analysis.points_completion.percentage(),
            comment_date: analysis.comment_date,
        }
    }
}

pub fn run(source: &SourceArgs, component: Option<&str>, output: OutputFormat) -> Result<()> {
    let source = load(source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(
        &source.epics,
        component,
        output,
        colors::should_colorize(),
        &mut out,
    )
}

/// Checks `epics` and writes one verdict per epic.
///
/// With a component, only the epics grouped under it are checked, scoped to
/// that component.
pub(crate) fn run_impl<W: Write>(
    epics: &[Issue],
    component: Option<&str>,
    output: OutputFormat,
    colorize: bool,
    out: &mut W,
) -> Result<()> {
    let verdicts = match component {
        Some(name) => {
            let groups: ComponentGroups = epics.iter().collect();
            let group = groups
                .groups()
                .iter()
                .find(|g| g.name == name)
                .ok_or_else(|| Error::UnknownComponent(name.to_string()))?;
            evaluate(&group.epics, Some(name), Verdict::new)
        }
        None => {
            let all: Vec<&Issue> = epics.iter().collect();
            evaluate(&all, None, Verdict::new)
        }
    };

    match output {
        OutputFormat::Text => output_text(&verdicts, colorize, out),
        OutputFormat::Json => output_json(&verdicts, out),
    }
}

fn output_text<W: Write>(verdicts: &[Verdict], colorize: bool, out: &mut W) -> Result<()> {
    for verdict in verdicts {
        let ready = if verdict.ready { "ready" } else { "not-ready" };
        let status = if colorize {
            colors::status(verdict.status)
        } else {
            verdict.status.to_string()
        };
        let mut line = format!("{} {} {}", verdict.key, ready, status);
        if !verdict.messages.is_empty() {
            line.push(' ');
            line.push_str(&verdict.messages.join(","));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn output_json<W: Write>(verdicts: &[Verdict], out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(verdicts)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
