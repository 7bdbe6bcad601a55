//! Local JSON-file issue source, for offline runs and tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use longpole_core::model::{FetchedIssue, IssueNumber};

use super::IssueSource;

/// Serves issues from a JSON file containing an array of fetched-issue
/// records (`[{"number": 1, "title": "…", "body": "…", "state": "open"}]`).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    issues: HashMap<IssueNumber, FetchedIssue>,
}

impl FileSource {
    /// Load every issue record from `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a JSON issue array.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let records: Vec<FetchedIssue> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            issues: records
                .into_iter()
                .map(|issue| (issue.number, issue))
                .collect(),
        })
    }
}

impl IssueSource for FileSource {
    fn fetch_issue(&self, number: IssueNumber) -> Result<FetchedIssue> {
        self.issues.get(&number).cloned().ok_or_else(|| {
            anyhow!(
                "issue #{number} not present in {}",
                self.path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSource, IssueSource};
    use std::fs;

    const FIXTURE: &str = r#"[
        {"number": 1, "title": "Base", "state": "open"},
        {"number": 2, "title": "Dependent", "body": "after #1", "state": "closed"}
    ]"#;

    #[test]
    fn serves_issues_from_fixture() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("issues.json");
        fs::write(&path, FIXTURE).expect("write fixture");

        let source = FileSource::load(&path).expect("load");
        let issue = source.fetch_issue(2).expect("present");
        assert_eq!(issue.title, "Dependent");
        assert_eq!(issue.body.as_deref(), Some("after #1"));
    }

    #[test]
    fn missing_issue_is_a_per_issue_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("issues.json");
        fs::write(&path, FIXTURE).expect("write fixture");

        let source = FileSource::load(&path).expect("load");
        assert!(source.fetch_issue(99).is_err());
    }

    #[test]
    fn invalid_file_fails_to_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("issues.json");
        fs::write(&path, "{oops").expect("write fixture");

        assert!(FileSource::load(&path).is_err());
    }
}
