//! GitHub REST issue source.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use longpole_core::config::GithubConfig;
use longpole_core::model::{FetchedIssue, IssueNumber, RemoteState};

use super::IssueSource;

/// Fetches issues from the GitHub REST API.
///
/// The repository slug comes from `--repo` or `[github] repo` in the project
/// config; an optional `GITHUB_TOKEN` raises the rate limit and grants
/// access to private repositories.
#[derive(Debug, Clone)]
pub struct GithubSource {
    api_url: String,
    repo: String,
    token: Option<String>,
}

/// The subset of the issues API payload this engine consumes.
#[derive(Debug, Deserialize)]
struct ApiIssue {
    number: IssueNumber,
    title: String,
    body: Option<String>,
    state: RemoteState,
}

impl GithubSource {
    /// Build a source from config and the `--repo` override.
    ///
    /// # Errors
    ///
    /// Fails when no repository is configured anywhere.
    pub fn new(config: &GithubConfig, repo_flag: Option<&str>) -> Result<Self> {
        let Some(repo) = repo_flag.or(config.repo.as_deref()) else {
            bail!("no repository configured; pass --repo or set [github] repo in config.toml");
        };

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token: std::env::var("GITHUB_TOKEN").ok(),
        })
    }
}

impl IssueSource for GithubSource {
    fn fetch_issue(&self, number: IssueNumber) -> Result<FetchedIssue> {
        let url = format!("{}/repos/{}/issues/{number}", self.api_url, self.repo);

        let mut request = ureq::get(&url)
            .set("User-Agent", "longpole")
            .set("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let issue: ApiIssue = request
            .call()
            .with_context(|| format!("GET {url}"))?
            .into_json()
            .with_context(|| format!("decoding issue #{number} payload"))?;

        Ok(FetchedIssue {
            number: issue.number,
            title: issue.title,
            body: issue.body,
            state: issue.state,
        })
    }
}
