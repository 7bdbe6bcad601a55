//! `lp releases` — list the release manifest.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use longpole_core::model::Release;
use longpole_core::state::load_releases;

use crate::output::{OutputMode, render, render_error, to_cli_error};

/// Arguments for `lp releases`.
#[derive(Args, Debug, Default)]
pub struct ReleasesArgs {}

#[derive(Debug, Serialize)]
struct ReleasesOutput {
    releases: Vec<Release>,
}

/// Execute `lp releases`.
pub fn run_releases(
    _args: &ReleasesArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let releases = match load_releases(project_root) {
        Ok(releases) => releases,
        Err(err) => {
            let err: anyhow::Error = err.into();
            render_error(output, &to_cli_error(&err))?;
            anyhow::bail!("listing releases failed");
        }
    };

    let payload = ReleasesOutput { releases };
    render(output, &payload, render_releases_human)
}

fn render_releases_human(payload: &ReleasesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.releases.is_empty() {
        writeln!(w, "No releases in the manifest.")?;
        return Ok(());
    }

    writeln!(w, "Releases ({})", payload.releases.len())?;
    for release in &payload.releases {
        let name = release.name.as_deref().unwrap_or("-");
        writeln!(
            w,
            "  {:<12} {:<12} {:>3} issue(s)  {}  created {}",
            release.version,
            release.status.as_str(),
            release.issues.len(),
            name,
            release.created_at.format("%Y-%m-%d"),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ReleasesOutput, render_releases_human};
    use longpole_core::model::{Release, ReleaseIssue, ReleaseStatus};

    #[test]
    fn renders_empty_manifest_note() {
        let payload = ReleasesOutput {
            releases: Vec::new(),
        };
        let mut out = Vec::new();
        render_releases_human(&payload, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("No releases"));
    }

    #[test]
    fn renders_release_rows() {
        let payload = ReleasesOutput {
            releases: vec![Release {
                version: "v1.2".into(),
                name: Some("Hardening".into()),
                status: ReleaseStatus::Active,
                issues: vec![ReleaseIssue {
                    number: 1,
                    title: "Base".into(),
                }],
                created_at: "2026-05-01T12:00:00Z".parse().expect("timestamp"),
                updated_at: None,
            }],
        };

        let mut out = Vec::new();
        render_releases_human(&payload, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("v1.2"));
        assert!(rendered.contains("active"));
        assert!(rendered.contains("Hardening"));
        assert!(rendered.contains("2026-05-01"));
    }
}
