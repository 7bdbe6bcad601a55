//! Command handlers for the `lp` binary.

pub mod completions;
pub mod cycles;
pub mod graph;
pub mod path;
pub mod releases;
pub mod status;

use std::path::PathBuf;

use clap::Args;

use crate::selection::SourceArgs;

/// Selection flags shared by every release-scoped command.
#[derive(Args, Debug)]
pub struct SelectionCliArgs {
    /// Release version to analyze (as listed by `lp releases`).
    pub version: String,

    /// Read issues from a local JSON fixture instead of the remote tracker.
    #[arg(long, value_name = "FILE")]
    pub issues_file: Option<PathBuf>,

    /// Repository slug (`owner/repo`) overriding `[github] repo` in config.
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,
}

impl SelectionCliArgs {
    /// Borrow the source-selection view of these flags.
    #[must_use]
    pub fn source_args(&self) -> SourceArgs<'_> {
        SourceArgs {
            issues_file: self.issues_file.as_deref(),
            repo: self.repo.as_deref(),
        }
    }
}
