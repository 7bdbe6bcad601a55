use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::issue::IssueNumber;

/// Lifecycle state of a tracked piece of work.
///
/// Only `executing`, `completed`, and `failed` map one-to-one onto canonical
/// issue statuses; every other live state resolves to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Pending,
    Reviewing,
    Planning,
    Executing,
    Paused,
    Shipping,
    Completed,
    Failed,
}

impl WorkStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Planning => "planning",
            Self::Executing => "executing",
            Self::Paused => "paused",
            Self::Shipping => "shipping",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Issue metadata carried inside a live work record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkIssueRef {
    pub number: IssueNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Release metadata carried inside a live work record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkReleaseRef {
    pub version: String,
    #[serde(default)]
    pub issues: Vec<IssueNumber>,
}

/// Live work on a single issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueWork {
    pub issue: WorkIssueRef,
    pub status: WorkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Live work on a release (a group of issues).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseWork {
    pub release: WorkReleaseRef,
    pub status: WorkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Any live work record, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkRecord {
    Issue(IssueWork),
    Release(ReleaseWork),
}

/// The live work map, keyed `issue:<number>` / `release:<version>`.
pub type ActiveWork = HashMap<String, WorkRecord>;

/// Work key for an issue, matching the tracker's key convention.
#[must_use]
pub fn issue_work_key(number: IssueNumber) -> String {
    format!("issue:{number}")
}

/// Record of a completed issue in the tracker's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedIssueRecord {
    pub number: IssueNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// Record of a completed release in the tracker's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedReleaseRecord {
    pub version: String,
    #[serde(default)]
    pub issues: Vec<IssueNumber>,
    pub completed_at: DateTime<Utc>,
}

/// History of completed work; membership is tested by issue number only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_issue: Option<CompletedIssueRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_release: Option<CompletedReleaseRecord>,
    #[serde(default)]
    pub recent_issues: Vec<CompletedIssueRecord>,
}
