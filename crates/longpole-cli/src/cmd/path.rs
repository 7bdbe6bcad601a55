//! `lp path` — the critical path of one release, or a cycle warning when
//! no path exists.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use longpole_core::model::IssueNumber;
use longpole_graph::{CriticalPath, find_cycles};

use crate::output::{OutputMode, render, render_error, to_cli_error};
use crate::selection::analyze_release;

use super::SelectionCliArgs;

/// Arguments for `lp path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub selection: SelectionCliArgs,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    release: String,
    /// `null` when the graph is cyclic — distinct from an empty path.
    critical_path: Option<CriticalPath>,
    /// Cycle members, populated only when the path is unavailable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<Vec<IssueNumber>>,
    #[serde(skip)]
    titles: HashMap<IssueNumber, String>,
}

/// Execute `lp path`.
pub fn run_path(args: &PathArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let analysis = match analyze_release(
        project_root,
        &args.selection.version,
        args.selection.source_args(),
    ) {
        Ok(analysis) => analysis,
        Err(err) => {
            render_error(output, &to_cli_error(&err))?;
            anyhow::bail!("path analysis failed");
        }
    };

    let cycles = if analysis.critical_path.is_none() {
        find_cycles(&analysis.graph)
    } else {
        Vec::new()
    };

    let titles: HashMap<IssueNumber, String> = analysis
        .graph
        .nodes
        .iter()
        .map(|node| (node.number, node.title.clone()))
        .collect();

    let payload = PathOutput {
        release: analysis.release.version,
        critical_path: analysis.critical_path,
        cycles,
        titles,
    };

    render(output, &payload, render_path_human)
}

fn render_path_human(payload: &PathOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let title_of = |number: IssueNumber| {
        payload
            .titles
            .get(&number)
            .map_or("", String::as_str)
    };

    match &payload.critical_path {
        None => {
            writeln!(
                w,
                "Dependency cycle detected in {} — critical path unavailable.",
                payload.release
            )?;
            for (idx, cycle) in payload.cycles.iter().enumerate() {
                writeln!(w, "\nCycle {}:", idx + 1)?;
                for number in cycle {
                    writeln!(w, "  - #{number} — {}", title_of(*number))?;
                }
            }
        }
        Some(path) if path.is_empty() => {
            writeln!(
                w,
                "No dependency chain to highlight in {}.",
                payload.release
            )?;
        }
        Some(path) => {
            writeln!(
                w,
                "Critical path for {} ({} hop(s)):",
                payload.release,
                path.hops()
            )?;
            for number in &path.path {
                writeln!(w, "  #{number} — {}", title_of(*number))?;
            }
        }
    }

    Ok(())
}
