//! Read-only loaders for the tracker's on-disk state.
//!
//! The agent pipeline owns `.longpole/state.json` (live work + completion
//! history) and `.longpole/releases.json` (the release manifest). This
//! engine only ever reads them; graphs are rebuilt from scratch on every
//! invocation, so there is no cache to invalidate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PROJECT_DIR;
use crate::error::LongpoleError;
use crate::model::{ActiveWork, CompletedIssueRecord, Release, WorkHistory};

/// File name of the tracker state inside the project directory.
pub const STATE_FILE: &str = "state.json";

/// File name of the release manifest inside the project directory.
pub const RELEASES_FILE: &str = "releases.json";

/// Root state object written by the agent pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub active_work: ActiveWork,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<WorkHistory>,
}

impl TrackerState {
    /// State with no live work and no history.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schema_version: 1,
            active_work: HashMap::new(),
            history: None,
        }
    }

    /// Recently completed issues, or an empty slice when no history exists.
    #[must_use]
    pub fn recent_issues(&self) -> &[CompletedIssueRecord] {
        self.history
            .as_ref()
            .map_or(&[], |history| history.recent_issues.as_slice())
    }
}

/// Path to the project directory under `root`.
#[must_use]
pub fn project_dir(root: &Path) -> PathBuf {
    root.join(PROJECT_DIR)
}

/// Load the tracker state, defaulting to empty when the file is absent.
///
/// An absent state file is normal (nothing has been worked on yet); a
/// present-but-invalid one is an error.
///
/// # Errors
///
/// Returns [`LongpoleError::Io`] if the file exists but cannot be read, or
/// [`LongpoleError::Parse`] if it is not valid state JSON.
pub fn load_tracker_state(root: &Path) -> Result<TrackerState, LongpoleError> {
    let path = project_dir(root).join(STATE_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no tracker state file; using empty state");
        return Ok(TrackerState::empty());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| LongpoleError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LongpoleError::Parse { path, source })
}

/// Load the release manifest.
///
/// # Errors
///
/// Returns [`LongpoleError::ManifestMissing`] when the manifest does not
/// exist, [`LongpoleError::Io`] when it cannot be read, or
/// [`LongpoleError::Parse`] when it is not a valid release list.
pub fn load_releases(root: &Path) -> Result<Vec<Release>, LongpoleError> {
    let path = project_dir(root).join(RELEASES_FILE);
    if !path.exists() {
        return Err(LongpoleError::ManifestMissing { path });
    }

    let content = std::fs::read_to_string(&path).map_err(|source| LongpoleError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LongpoleError::Parse { path, source })
}

/// Find one release by version in the manifest.
///
/// # Errors
///
/// Returns [`LongpoleError::UnknownRelease`] when no release carries the
/// requested version, in addition to the [`load_releases`] errors.
pub fn find_release(root: &Path, version: &str) -> Result<Release, LongpoleError> {
    load_releases(root)?
        .into_iter()
        .find(|release| release.version == version)
        .ok_or_else(|| LongpoleError::UnknownRelease {
            version: version.to_string(),
        })
}
