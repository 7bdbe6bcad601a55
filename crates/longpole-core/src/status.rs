//! Canonical status resolution.
//!
//! # Overview
//!
//! Status information for an issue arrives from three independent, possibly
//! stale sources: the live work tracker, the completion history, and the
//! remote tracker's raw open/closed flag. Live tracking is more current than
//! history, and history is more current than the remote tracker's possibly
//! unsynced state, so resolution is an ordered rule chain evaluated
//! first-match-wins:
//!
//! 1. **live-work** — an issue-tagged record under `issue:<number>` maps its
//!    lifecycle state onto a canonical status.
//! 2. **history** — membership in the recently-completed list means
//!    `completed`.
//! 3. **remote** — always matches: `closed` if the remote flag says closed,
//!    otherwise `open`.
//!
//! The chain keeps the precedence rule singly defined instead of scattering
//! nested conditionals across call sites. Resolution is pure and total:
//! every issue gets exactly one of the six canonical statuses.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{
    ActiveWork, CompletedIssueRecord, FetchedIssue, WorkRecord, WorkStatus, issue_work_key,
};

/// The single resolved execution state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Closed,
    Pending,
    Executing,
    Completed,
    Failed,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Pending => "pending",
            Self::Executing => "executing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps column alignment working in table renderers.
        f.pad(self.as_str())
    }
}

/// The two tracker-side sources consulted ahead of the remote state.
#[derive(Debug, Clone, Copy)]
pub struct StatusSources<'a> {
    /// Live work map, keyed `issue:<number>`.
    pub active_work: &'a ActiveWork,
    /// Recently completed issues; membership tested by number only.
    pub recent_issues: &'a [CompletedIssueRecord],
}

type StatusRule = for<'a> fn(&FetchedIssue, &StatusSources<'a>) -> Option<Status>;

/// The precedence chain. Order is the design decision: earlier sources are
/// fresher. The final rule is total, so resolution always produces a value.
const RULES: [(&str, StatusRule); 3] = [
    ("live-work", live_work_rule),
    ("history", history_rule),
    ("remote", remote_rule),
];

/// Resolve the canonical status of one issue.
///
/// Pure and total: the same inputs always produce the same status, and every
/// issue number produces exactly one status, never an error.
#[must_use]
pub fn resolve_status(issue: &FetchedIssue, sources: &StatusSources<'_>) -> Status {
    for (name, rule) in RULES {
        if let Some(status) = rule(issue, sources) {
            trace!(issue = issue.number, rule = name, status = %status, "status resolved");
            return status;
        }
    }
    // The remote rule matches unconditionally; this arm is unreachable.
    Status::Open
}

/// Rule 1: a live work record overrides everything else.
///
/// Only issue-tagged records participate; a release record stored under an
/// issue key (malformed state) is ignored rather than misread.
fn live_work_rule(issue: &FetchedIssue, sources: &StatusSources<'_>) -> Option<Status> {
    let record = sources.active_work.get(&issue_work_key(issue.number))?;
    let WorkRecord::Issue(work) = record else {
        return None;
    };
    Some(match work.status {
        WorkStatus::Executing => Status::Executing,
        WorkStatus::Failed => Status::Failed,
        WorkStatus::Completed => Status::Completed,
        // Not yet started, paused, or queued states all surface as pending.
        WorkStatus::Pending
        | WorkStatus::Reviewing
        | WorkStatus::Planning
        | WorkStatus::Paused
        | WorkStatus::Shipping => Status::Pending,
    })
}

/// Rule 2: recently-completed history wins over the remote flag.
fn history_rule(issue: &FetchedIssue, sources: &StatusSources<'_>) -> Option<Status> {
    sources
        .recent_issues
        .iter()
        .any(|record| record.number == issue.number)
        .then_some(Status::Completed)
}

/// Rule 3: fall back to the remote tracker's raw state. Always matches.
fn remote_rule(issue: &FetchedIssue, _sources: &StatusSources<'_>) -> Option<Status> {
    Some(if issue.state.is_closed() {
        Status::Closed
    } else {
        Status::Open
    })
}
