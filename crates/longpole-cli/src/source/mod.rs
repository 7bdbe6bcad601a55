//! Issue sources: where raw issue text and remote state come from.
//!
//! The engine never fetches anything itself — it consumes whatever a source
//! produced. Sources may fail per issue; the fetch orchestrator degrades a
//! failed issue to a placeholder record rather than failing the whole
//! release.

pub mod file;
pub mod github;

use anyhow::Result;

use longpole_core::model::{FetchedIssue, IssueNumber};

pub use file::FileSource;
pub use github::GithubSource;

/// A per-issue provider of `{number, title, body?, state}` records.
///
/// `Sync` so the fetch orchestrator can share one source across its fan-out
/// threads.
pub trait IssueSource: Sync {
    /// Fetch one issue by number.
    ///
    /// # Errors
    ///
    /// Any failure is per-issue: the caller substitutes a placeholder and
    /// continues with the remaining issues.
    fn fetch_issue(&self, number: IssueNumber) -> Result<FetchedIssue>;
}
