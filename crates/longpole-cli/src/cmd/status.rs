//! `lp status` — resolved canonical status for every issue in a release.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use longpole_core::model::IssueNumber;
use longpole_core::status::Status;

use crate::output::{OutputMode, render, render_error, to_cli_error};
use crate::selection::analyze_release;

use super::SelectionCliArgs;

/// Arguments for `lp status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub selection: SelectionCliArgs,
}

#[derive(Debug, Serialize)]
struct StatusRow {
    number: IssueNumber,
    title: String,
    status: Status,
}

#[derive(Debug, Serialize)]
struct StatusOutput {
    release: String,
    issues: Vec<StatusRow>,
}

/// Execute `lp status`.
pub fn run_status(
    args: &StatusArgs,
    output: OutputMode,
    project_root: &Path,
) -> anyhow::Result<()> {
    let analysis = match analyze_release(
        project_root,
        &args.selection.version,
        args.selection.source_args(),
    ) {
        Ok(analysis) => analysis,
        Err(err) => {
            render_error(output, &to_cli_error(&err))?;
            anyhow::bail!("status resolution failed");
        }
    };

    let payload = StatusOutput {
        release: analysis.release.version,
        issues: analysis
            .graph
            .nodes
            .iter()
            .map(|node| StatusRow {
                number: node.number,
                title: node.title.clone(),
                status: node.status,
            })
            .collect(),
    };

    render(output, &payload, render_status_human)
}

fn render_status_human(payload: &StatusOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.issues.is_empty() {
        writeln!(w, "Release {} has no issues.", payload.release)?;
        return Ok(());
    }

    writeln!(w, "Release {} — resolved statuses", payload.release)?;
    for row in &payload.issues {
        writeln!(w, "  #{:<6} {:<10} {}", row.number, row.status, row.title)?;
    }

    Ok(())
}
