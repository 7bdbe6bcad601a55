use serde::{Deserialize, Serialize};

/// A remote tracker issue identifier, unique within the tracker.
pub type IssueNumber = u64;

/// The remote tracker's raw open/closed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteState {
    #[serde(alias = "OPEN")]
    Open,
    #[serde(alias = "CLOSED")]
    Closed,
}

impl RemoteState {
    /// Returns `true` if the remote tracker marks the issue closed.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// One issue as fetched from the remote tracker.
///
/// `body` is absent when the fetch failed and a best-effort placeholder was
/// substituted; an absent body simply yields zero extracted dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedIssue {
    pub number: IssueNumber,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub state: RemoteState,
}

impl FetchedIssue {
    /// Minimal record substituted when a per-issue fetch fails.
    ///
    /// Title and number come from the release manifest; the body is absent
    /// and the remote state defaults to open.
    #[must_use]
    pub fn placeholder(number: IssueNumber, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: None,
            state: RemoteState::Open,
        }
    }
}
