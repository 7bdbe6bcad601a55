//! Domain types for issues, releases, and tracked work.
//!
//! The wire-format structs (`state.json`, `releases.json`) use camelCase
//! field names to match the agent pipeline's JSON schema; everything is
//! consumed read-only — this engine never mutates tracker state.

pub mod issue;
pub mod release;
pub mod work;

pub use issue::{FetchedIssue, IssueNumber, RemoteState};
pub use release::{Release, ReleaseIssue, ReleaseStatus};
pub use work::{
    ActiveWork, CompletedIssueRecord, CompletedReleaseRecord, IssueWork, ReleaseWork, WorkHistory,
    WorkIssueRef, WorkRecord, WorkReleaseRef, WorkStatus, issue_work_key,
};
