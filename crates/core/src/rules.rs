// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered battery of readiness checks.
//!
//! Every check is a [`Rule`]: a condition over an [`IssueAnalysis`] and the
//! [`Effect`] applied to the [`CheckResult`] when it holds. [`RULES`] lists
//! them in evaluation order; that order decides the order of the messages
//! and nothing else, since readiness and status merge monotonically.

use std::fmt;

use crate::analysis::IssueAnalysis;
use crate::check::{CheckResult, CheckStatus};
use crate::issue::IssueType;

/// Diagnostic codes. Their spelling is part of the report format.
pub mod codes {
    pub const OBSOLETE: &str = "OBSOLETE";
    pub const ALONGSIDE: &str = "ALONGSIDE";
    pub const NOVERSION: &str = "NOVERSION";
    pub const MULTIVERSION: &str = "MULTIVERSION";
    pub const NOSTORIES: &str = "NOSTORIES";
    pub const NODESCRIPTION: &str = "NODESCRIPTION";
    pub const NOTREADY: &str = "NOTREADY";
    pub const NOACKS: &str = "NOACKS";
    pub const NODELIVERYOWNER: &str = "NODELIVERYOWNER";
    pub const NOQEMISMATCH: &str = "NOQEMISMATCH";
    pub const NOQEASSIGNEE: &str = "NOQEASSIGNEE";
    pub const NOCRITERIA: &str = "NOCRITERIA";
    pub const NOPRIORITY: &str = "NOPRIORITY";
    pub const NOTSTARTED: &str = "NOTSTARTED";
    pub const IMPEDIMENT: &str = "IMPEDIMENT";
    pub const NOMARKETPROBLEM: &str = "NOMARKETPROBLEM";
    pub const ISSUENOCOMPONENT: &str = "ISSUENOCOMPONENT";
    pub const MULTICOMPONENT: &str = "MULTICOMPONENT";
    pub const NOTDONE: &str = "NOTDONE";
    pub const NOACTIVESTORIES: &str = "NOACTIVESTORIES";
    pub const NOEPIC: &str = "NOEPIC";
    pub const NOSTATUSCOMMENT: &str = "NOSTATUSCOMMENT";
    pub const NODESIGN: &str = "NODESIGN";
}

/// How a firing rule moves the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEffect {
    Keep,
    Raise(CheckStatus),
    /// Raise to whatever the status comments signaled.
    CommentStatus,
}

/// What a firing rule does to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub message: Option<&'static str>,
    pub not_ready: bool,
    pub status: StatusEffect,
}

impl Effect {
    /// Only records a message.
    pub const fn message(code: &'static str) -> Self {
        Effect {
            message: Some(code),
            not_ready: false,
            status: StatusEffect::Keep,
        }
    }

    /// Marks the epic not ready.
    pub const fn not_ready(code: &'static str) -> Self {
        Effect {
            message: Some(code),
            not_ready: true,
            status: StatusEffect::Keep,
        }
    }

    /// Raises the status.
    pub const fn raise(code: &'static str, status: CheckStatus) -> Self {
        Effect {
            message: Some(code),
            not_ready: false,
            status: StatusEffect::Raise(status),
        }
    }

    /// Marks the epic not ready and raises the status.
    pub const fn blocking(code: &'static str, status: CheckStatus) -> Self {
        Effect {
            message: Some(code),
            not_ready: true,
            status: StatusEffect::Raise(status),
        }
    }

    /// Merges this effect into `result`.
    pub fn apply(&self, analysis: &IssueAnalysis<'_>, result: &mut CheckResult) {
        if self.not_ready {
            result.set_ready(false);
        }
        match self.status {
            StatusEffect::Keep => {}
            StatusEffect::Raise(status) => {
                result.set_status(status);
            }
            StatusEffect::CommentStatus => {
                result.set_status(analysis.comment_status);
            }
        }
        if let Some(code) = self.message {
            result.add_message(code);
        }
    }
}

/// A named check: when `condition` holds, `effect` is applied.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub condition: fn(&IssueAnalysis<'_>) -> bool,
    pub effect: Effect,
}

impl Rule {
    /// Evaluates the rule, returning true if it fired.
    pub fn apply(&self, analysis: &IssueAnalysis<'_>, result: &mut CheckResult) -> bool {
        let fired = (self.condition)(analysis);
        if fired {
            self.effect.apply(analysis, result);
        }
        fired
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("effect", &self.effect)
            .finish()
    }
}

/// Every check, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "alongside-marker",
        condition: |a| {
            a.issue
                .fix_versions
                .iter()
                .any(|v| v.starts_with("Alongside"))
        },
        effect: Effect::message(codes::ALONGSIDE),
    },
    Rule {
        name: "version-presence",
        condition: |a| a.issue.fix_versions.is_empty(),
        effect: Effect::not_ready(codes::NOVERSION),
    },
    Rule {
        name: "version-multiplicity",
        condition: |a| a.issue.fix_versions.len() > 1,
        effect: Effect::message(codes::MULTIVERSION),
    },
    Rule {
        name: "activities",
        condition: |a| a.issue.is_epic() && a.num_activities == 0,
        effect: Effect::not_ready(codes::NOSTORIES),
    },
    Rule {
        name: "description",
        condition: |a| !a.issue.has_description(),
        effect: Effect::not_ready(codes::NODESCRIPTION),
    },
    Rule {
        name: "readiness",
        condition: |a| a.issue.is_epic() && !a.issue.readiness.ready(),
        effect: Effect::not_ready(codes::NOTREADY),
    },
    Rule {
        name: "approvals",
        condition: |a| a.issue.is_epic() && !a.issue.approvals.approved(),
        effect: Effect::raise(codes::NOACKS, CheckStatus::Red),
    },
    Rule {
        name: "delivery-owner",
        condition: |a| !a.issue.has_owner(),
        effect: Effect::blocking(codes::NODELIVERYOWNER, CheckStatus::Red),
    },
    Rule {
        name: "qe-mismatch",
        condition: |a| a.issue.planning.no_quality && a.issue.has_qe_assignee(),
        effect: Effect::not_ready(codes::NOQEMISMATCH),
    },
    Rule {
        name: "qe-assignee",
        condition: |a| !a.issue.planning.no_quality && !a.issue.has_qe_assignee(),
        effect: Effect::blocking(codes::NOQEASSIGNEE, CheckStatus::Red),
    },
    Rule {
        name: "acceptance-criteria",
        condition: |a| !a.issue.has_acceptance(),
        effect: Effect::blocking(codes::NOCRITERIA, CheckStatus::Red),
    },
    Rule {
        name: "priority",
        condition: |a| !a.issue.is_prioritized(),
        effect: Effect::blocking(codes::NOPRIORITY, CheckStatus::Red),
    },
    Rule {
        name: "started",
        condition: |a| !a.issue.is_active() && !a.issue.is_done(),
        effect: Effect::raise(codes::NOTSTARTED, CheckStatus::Yellow),
    },
    Rule {
        name: "impediment",
        condition: |a| a.impediment(),
        effect: Effect::raise(codes::IMPEDIMENT, CheckStatus::Red),
    },
    Rule {
        name: "market-problem",
        condition: |a| a.issue.is_epic() && a.issue.market_problem.is_none(),
        effect: Effect::not_ready(codes::NOMARKETPROBLEM),
    },
    Rule {
        name: "issue-component-coverage",
        condition: |a| a.issue_no_component,
        effect: Effect::not_ready(codes::ISSUENOCOMPONENT),
    },
    Rule {
        name: "multi-component",
        condition: |a| a.component.is_some() && a.issue.components.len() != 1,
        effect: Effect::blocking(codes::MULTICOMPONENT, CheckStatus::Yellow),
    },
    Rule {
        name: "not-done",
        condition: |a| {
            a.issue.is_done()
                && !(a.issues_completion.is_finished() && a.points_completion.is_finished())
        },
        effect: Effect::raise(codes::NOTDONE, CheckStatus::Red),
    },
    Rule {
        // Usually a no-op: any earlier yellow or red finding outranks it.
        name: "done",
        condition: |a| {
            a.issue.is_done()
                && a.issues_completion.is_finished()
                && a.points_completion.is_finished()
        },
        effect: Effect {
            message: None,
            not_ready: false,
            status: StatusEffect::Raise(CheckStatus::Green),
        },
    },
    Rule {
        name: "started-stories",
        condition: |a| a.issue.is_epic() && a.issue.is_active() && !a.has_started_issues(),
        effect: Effect::raise(codes::NOACTIVESTORIES, CheckStatus::Red),
    },
    Rule {
        name: "linked-epic",
        condition: |a| a.issue.is_type(IssueType::Story) && !a.issue.has_epic_link(),
        effect: Effect::not_ready(codes::NOEPIC),
    },
    Rule {
        name: "no-status-comment",
        condition: |a| a.comment_status == CheckStatus::None,
        effect: Effect::message(codes::NOSTATUSCOMMENT),
    },
    Rule {
        name: "status-comment",
        condition: |a| a.comment_status != CheckStatus::None,
        effect: Effect {
            message: None,
            not_ready: false,
            status: StatusEffect::CommentStatus,
        },
    },
    Rule {
        name: "design-doc",
        condition: |a| !a.issue.planning.no_feature && !a.issue.has_design_doc(),
        effect: Effect::not_ready(codes::NODESIGN),
    },
];

/// Runs the checks for one epic.
///
/// An obsolete epic only gets the `OBSOLETE` message; nothing else is
/// evaluated and it keeps a ready, statusless verdict.
pub fn evaluate(analysis: &IssueAnalysis<'_>) -> CheckResult {
    let mut result = CheckResult::new();

    if analysis.issue.is_obsolete() {
        result.add_message(codes::OBSOLETE);
        return result;
    }

    for rule in RULES {
        rule.apply(analysis, &mut result);
    }

    result
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
