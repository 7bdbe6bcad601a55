use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::issue::IssueNumber;

/// Delivery status of a release bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    Active,
    Completed,
    Shipped,
    NotPlanned,
}

impl ReleaseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Shipped => "shipped",
            Self::NotPlanned => "not_planned",
        }
    }
}

/// Membership entry: one issue slated for a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseIssue {
    pub number: IssueNumber,
    pub title: String,
}

/// A named bundle of issues slated for delivery together.
///
/// The release is the scope boundary for dependency graphs: references to
/// issues outside its membership are discarded at extraction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: ReleaseStatus,
    #[serde(default)]
    pub issues: Vec<ReleaseIssue>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Release {
    /// The scope set: every issue number belonging to this release.
    #[must_use]
    pub fn scope(&self) -> BTreeSet<IssueNumber> {
        self.issues.iter().map(|issue| issue.number).collect()
    }

    /// Manifest title for an issue number, if it is a member.
    #[must_use]
    pub fn issue_title(&self, number: IssueNumber) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.number == number)
            .map(|issue| issue.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Release, ReleaseStatus};

    fn manifest_release() -> Release {
        serde_json::from_str(
            r#"{
                "version": "v1.2.0",
                "name": "Hardening",
                "status": "active",
                "issues": [
                    {"number": 3, "title": "Schema migration"},
                    {"number": 5, "title": "Retry budget"}
                ],
                "createdAt": "2026-05-01T12:00:00Z"
            }"#,
        )
        .expect("parse release")
    }

    #[test]
    fn scope_collects_member_numbers() {
        let release = manifest_release();
        let scope = release.scope();
        assert!(scope.contains(&3));
        assert!(scope.contains(&5));
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn issue_title_for_members_only() {
        let release = manifest_release();
        assert_eq!(release.issue_title(5), Some("Retry budget"));
        assert_eq!(release.issue_title(99), None);
    }

    #[test]
    fn status_round_trips_snake_case() {
        let status: ReleaseStatus = serde_json::from_str("\"not_planned\"").expect("parse");
        assert_eq!(status, ReleaseStatus::NotPlanned);
        assert_eq!(status.as_str(), "not_planned");
    }
}
