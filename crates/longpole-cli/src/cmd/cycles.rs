//! `lp cycles` — list dependency cycles in a release's graph.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use longpole_core::model::IssueNumber;
use longpole_graph::find_cycles;

use crate::output::{OutputMode, render, render_error, to_cli_error};
use crate::selection::analyze_release;

use super::SelectionCliArgs;

/// Arguments for `lp cycles`.
#[derive(Args, Debug)]
pub struct CyclesArgs {
    #[command(flatten)]
    pub selection: SelectionCliArgs,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    release: String,
    cycles: Vec<Vec<IssueNumber>>,
}

/// Execute `lp cycles`.
pub fn run_cycles(
    args: &CyclesArgs,
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
            anyhow::bail!("cycle analysis failed");
        }
    };

    let titles: HashMap<IssueNumber, String> = analysis
        .graph
        .nodes
        .iter()
        .map(|node| (node.number, node.title.clone()))
        .collect();

    let payload = CyclesOutput {
        release: analysis.release.version,
        cycles: find_cycles(&analysis.graph),
    };

    render(output, &payload, |report, w| {
        render_cycles_human(report, &titles, w)
    })
}

fn render_cycles_human(
    payload: &CyclesOutput,
    titles: &HashMap<IssueNumber, String>,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if payload.cycles.is_empty() {
        writeln!(w, "No dependency cycles found in {}.", payload.release)?;
        return Ok(());
    }

    writeln!(
        w,
        "Dependency cycles in {} ({})",
        payload.release,
        payload.cycles.len()
    )?;

    for (idx, cycle) in payload.cycles.iter().enumerate() {
        writeln!(w, "\nCycle {}:", idx + 1)?;
        for number in cycle {
            if let Some(title) = titles.get(number) {
                writeln!(w, "  - #{number} — {title}")?;
            } else {
                writeln!(w, "  - #{number}")?;
            }
        }
    }

    Ok(())
}
