//! Shared fetch-and-compute pipeline for the release-scoped commands.
//!
//! Every analysis command walks the same path: load config and manifest,
//! pick the release, fan out fetches, build the graph, compute the critical
//! path, derive the summary. Each invocation builds an independent graph
//! from scratch — there is no cache between runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use longpole_core::config::load_project_config;
use longpole_core::extract::DependencyExtractor;
use longpole_core::model::Release;
use longpole_core::state::{TrackerState, find_release, load_tracker_state};
use longpole_core::status::StatusSources;
use longpole_graph::{CriticalPath, GraphSummary, ReleaseGraph, critical_path};

use crate::fetch::{CancelToken, fetch_release_issues};
use crate::source::{FileSource, GithubSource};

/// Everything the release-scoped commands render from.
#[derive(Debug)]
pub struct ReleaseAnalysis {
    pub release: Release,
    pub graph: ReleaseGraph,
    pub critical_path: Option<CriticalPath>,
    pub summary: GraphSummary,
}

/// Source selection shared by the analysis commands.
#[derive(Debug, Clone, Copy)]
pub struct SourceArgs<'a> {
    /// Offline issue fixture; wins over the GitHub source when set.
    pub issues_file: Option<&'a Path>,
    /// `owner/repo` override for the GitHub source.
    pub repo: Option<&'a str>,
}

/// Run the full pipeline for one release version.
///
/// # Errors
///
/// Fails on manifest/state/config problems or an unknown version; per-issue
/// fetch failures degrade to placeholders and are not errors.
pub fn analyze_release(
    project_root: &Path,
    version: &str,
    source_args: SourceArgs<'_>,
) -> Result<ReleaseAnalysis> {
    let config = load_project_config(project_root)?;
    let release = find_release(project_root, version)?;
    let state: TrackerState = load_tracker_state(project_root)?;

    let extractor = DependencyExtractor::with_extra_phrases(&config.graph.extra_keywords)
        .context("compiling extra_keywords from config.toml")?;

    let issues = {
        let cancel = CancelToken::new();
        match source_args.issues_file {
            Some(path) => {
                let source = FileSource::load(path)?;
                fetch_release_issues(&source, &release, &cancel)?
            }
            None => {
                let source = GithubSource::new(&config.github, source_args.repo)?;
                fetch_release_issues(&source, &release, &cancel)?
            }
        }
    };

    let scope = release.scope();
    let sources = StatusSources {
        active_work: &state.active_work,
        recent_issues: state.recent_issues(),
    };
    let graph = ReleaseGraph::build(&issues, &scope, &extractor, &sources);
    let path = critical_path(&graph);
    let summary = GraphSummary::new(&graph, path.as_ref());

    info!(
        release = %release.version,
        issues = summary.issue_count,
        edges = summary.edge_count,
        cycle = summary.cycle_detected,
        "release analyzed"
    );

    Ok(ReleaseAnalysis {
        release,
        graph,
        critical_path: path,
        summary,
    })
}
