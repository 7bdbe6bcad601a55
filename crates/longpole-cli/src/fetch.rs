//! Fan-out fetch orchestration for a release selection.
//!
//! Fetches every member issue of a release concurrently, one scoped thread
//! per issue. Failures are per-issue: a failed fetch degrades to a
//! placeholder record (title from the manifest, no body) so one flaky issue
//! never blocks the graph for the others.
//!
//! The cycle is cancellable: when the [`CancelToken`] trips while fetches
//! are in flight — a superseded release selection — the partial results are
//! discarded and [`LongpoleError::Cancelled`] is returned instead of a
//! stale issue set.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use longpole_core::error::LongpoleError;
use longpole_core::model::{FetchedIssue, Release, ReleaseIssue};

use crate::source::IssueSource;

/// Shared cancellation flag for one fetch-and-compute cycle.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag; in-flight results will be discarded.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fetch all member issues of `release`, preserving manifest order.
///
/// # Errors
///
/// Returns [`LongpoleError::Cancelled`] when the token tripped; per-issue
/// fetch failures are not errors (placeholders are substituted).
pub fn fetch_release_issues(
    source: &dyn IssueSource,
    release: &Release,
    cancel: &CancelToken,
) -> Result<Vec<FetchedIssue>, LongpoleError> {
    let issues: Vec<FetchedIssue> = std::thread::scope(|scope| {
        let handles: Vec<_> = release
            .issues
            .iter()
            .map(|member| scope.spawn(move || fetch_one(source, member, cancel)))
            .collect();

        handles
            .into_iter()
            .zip(&release.issues)
            .map(|(handle, member)| {
                // A panicking fetch thread degrades like a failed fetch.
                handle
                    .join()
                    .unwrap_or_else(|_| FetchedIssue::placeholder(member.number, member.title.as_str()))
            })
            .collect()
    });

    if cancel.is_cancelled() {
        debug!(release = %release.version, "selection superseded; discarding fetched issues");
        return Err(LongpoleError::Cancelled);
    }

    Ok(issues)
}

fn fetch_one(source: &dyn IssueSource, member: &ReleaseIssue, cancel: &CancelToken) -> FetchedIssue {
    if cancel.is_cancelled() {
        return FetchedIssue::placeholder(member.number, member.title.as_str());
    }

    match source.fetch_issue(member.number) {
        Ok(issue) => issue,
        Err(err) => {
            warn!(issue = member.number, error = %format!("{err:#}"), "fetch failed; using placeholder");
            FetchedIssue::placeholder(member.number, member.title.as_str())
        }
    }
}
