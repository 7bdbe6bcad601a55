//! `lp graph` — full dependency graph for one release: nodes, edges,
//! critical path, and summary signals.

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Serialize;

use longpole_graph::{CriticalPath, GraphEdge, GraphNode, GraphSummary};

use crate::output::{OutputMode, pretty_section, render, render_error, to_cli_error};
use crate::selection::analyze_release;

use super::SelectionCliArgs;

/// Arguments for `lp graph`.
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub selection: SelectionCliArgs,
}

#[derive(Debug, Serialize)]
struct GraphOutput {
    release: String,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    critical_path: Option<CriticalPath>,
    summary: GraphSummary,
}

/// Execute `lp graph`.
pub fn run_graph(args: &GraphArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let analysis = match analyze_release(
        project_root,
        &args.selection.version,
        args.selection.source_args(),
    ) {
        Ok(analysis) => analysis,
        Err(err) => {
            render_error(output, &to_cli_error(&err))?;
            anyhow::bail!("graph analysis failed");
        }
    };

    let payload = GraphOutput {
        release: analysis.release.version,
        nodes: analysis.graph.nodes,
        edges: analysis.graph.edges,
        critical_path: analysis.critical_path,
        summary: analysis.summary,
    };

    render(output, &payload, render_graph_human)
}

fn render_graph_human(payload: &GraphOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(
        w,
        &format!(
            "Release {} — {} issue(s), {} dependency edge(s)",
            payload.release, payload.summary.issue_count, payload.summary.edge_count
        ),
    )?;

    for node in &payload.nodes {
        writeln!(w, "  #{:<6} {:<10} {}", node.number, node.status, node.title)?;
    }

    if payload.edges.is_empty() {
        writeln!(w, "\nNo dependencies declared between these issues.")?;
        return Ok(());
    }

    writeln!(w, "\nDependencies (dependency → dependent)")?;
    for edge in &payload.edges {
        writeln!(w, "  #{} → #{}", edge.from, edge.to)?;
    }

    match &payload.critical_path {
        None => writeln!(
            w,
            "\nDependency cycle detected — critical path unavailable. Run `lp cycles` for members."
        )?,
        Some(path) if path.is_empty() => {
            writeln!(w, "\nNo dependency chain to highlight.")?;
        }
        Some(path) => {
            writeln!(w, "\nCritical path ({} hop(s))", path.hops())?;
            let rendered: Vec<String> =
                path.path.iter().map(|number| format!("#{number}")).collect();
            writeln!(w, "  {}", rendered.join(" → "))?;
        }
    }

    Ok(())
}
