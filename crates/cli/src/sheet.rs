// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spreadsheet cell formatting for the epic report.

use chrono::{DateTime, Utc};

use es_core::{CheckResult, CheckStatus, Issue, IssueAnalysis, Progress};

/// Placeholder for cells without a meaningful value.
pub const DASH: &str = "\u{2014}";
/// Ready ballot.
pub const CHECK_MARK: &str = "\u{2713}";
/// Not-ready ballot.
pub const CROSS: &str = "\u{2717}";

/// Label of the group holding epics without any component.
pub const UNASSIGNED: &str = "[UNASSIGNED]";

/// Number of columns in an epic row.
pub const COLUMNS: usize = 13;

pub fn hyperlink(url: &str, text: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\",\"{}\")",
        formula_string(url),
        formula_string(text)
    )
}

/// Escapes a formula string literal by doubling its quotes.
fn formula_string(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Bar chart of completed against remaining work.
pub fn sparkline(completed: u32, total: u32) -> String {
    if completed > total || (completed == 0 && total == 0) {
        return DASH.to_string();
    }
    format!(
        "=SPARKLINE({{{},{}}},{{\"charttype\",\"bar\";\"color1\",\"#93c47d\";\"color2\",\"#efefef\"}})",
        completed,
        total - completed
    )
}

/// Story point bar; a dash unless every story is estimated.
pub fn points_sparkline(progress: &Progress) -> String {
    if !progress.is_estimated() {
        return DASH.to_string();
    }
    sparkline(progress.completed, progress.total)
}

pub fn ballot(ready: bool) -> &'static str {
    if ready {
        CHECK_MARK
    } else {
        CROSS
    }
}

pub fn status(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::None => DASH,
        other => other.as_str(),
    }
}

pub fn date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => DASH.to_string(),
    }
}

/// Header row opening a component group.
pub fn component_row(name: &str) -> Vec<String> {
    let mut row = vec![String::new(); COLUMNS];
    row[0] = name.to_string();
    row
}

/// One report row for an evaluated epic.
pub fn epic_row(analysis: &IssueAnalysis<'_>, result: &CheckResult) -> Vec<String> {
    let epic: &Issue = analysis.issue;
    let market_problem = match epic.market_problem.as_deref() {
        Some(problem) => hyperlink(&problem.link, &problem.summary),
        None => hyperlink("", ""),
    };

    vec![
        hyperlink(&epic.link, &epic.key),
        epic.summary.clone(),
        market_problem,
        epic.priority.clone().unwrap_or_default(),
        epic.status.to_string(),
        epic.owner.clone().unwrap_or_default(),
        epic.qe_assignee.clone().unwrap_or_default(),
        sparkline(
            analysis.issues_completion.completed,
            analysis.issues_completion.total,
        ),
        points_sparkline(&analysis.points_completion),
        date(analysis.comment_date),
        ballot(result.ready).to_string(),
        status(result.status).to_string(),
        result.sorted_messages().join(","),
    ]
}

#[cfg(test)]
#[path = "sheet_tests.rs"]
mod tests;
