//! Summary signals exposed alongside the graph.
//!
//! The consuming surface needs three cheap booleans/counters next to the
//! node and edge lists: how many issues the selection holds, whether any
//! dependency edges exist at all, and whether a cycle blocked the critical
//! path. Cycle detection is derived — a `None` critical path while edges
//! exist — so the summary cannot disagree with the path result.

use serde::Serialize;

use crate::build::ReleaseGraph;
use crate::critical_path::CriticalPath;

/// Per-selection summary of the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Number of issues in the selected release.
    pub issue_count: usize,
    /// Number of dependency edges.
    pub edge_count: usize,
    /// Whether any dependency edges exist at all.
    pub has_edges: bool,
    /// Whether a cycle made the critical path unavailable.
    pub cycle_detected: bool,
}

impl GraphSummary {
    /// Derive the summary from a built graph and its critical-path result.
    #[must_use]
    pub fn new(graph: &ReleaseGraph, critical_path: Option<&CriticalPath>) -> Self {
        let has_edges = graph.edge_count() > 0;
        Self {
            issue_count: graph.node_count(),
            edge_count: graph.edge_count(),
            has_edges,
            cycle_detected: critical_path.is_none() && has_edges,
        }
    }
}
