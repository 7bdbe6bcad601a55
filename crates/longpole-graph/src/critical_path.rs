//! Critical path analysis for the release dependency graph.
//!
//! # Overview
//!
//! The critical path is the *longest* dependency chain in the release — the
//! sequence most likely to bound total completion time. Edge weight is
//! uniformly 1 (path length = number of hops), not a time estimate.
//!
//! # Algorithm
//!
//! 1. Topologically sort the graph (Kahn, [`crate::topo`]). A cycle means
//!    there is no critical path: the result is `None`, distinct from the
//!    empty result an edge-free graph produces.
//! 2. Longest-path dynamic program over the topological order: every node
//!    starts at length 0; each edge `u → v` relaxes `v` to `length(u) + 1`
//!    when that is strictly greater.
//! 3. The terminal node is the one with the maximum length; ties keep the
//!    earliest node found during the scan (strict `>` updates only), so the
//!    choice is pinned to the topological order rather than map iteration
//!    order.
//! 4. Reconstruct by following predecessor links backward from the terminal,
//!    collecting every visited node and every traversed edge.
//!
//! The whole result is recomputed on every input change; there is no
//! incremental update path.

#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeSet;

use petgraph::Direction;
use petgraph::visit::EdgeRef;
use serde::Serialize;

use longpole_core::model::IssueNumber;

use crate::build::ReleaseGraph;
use crate::topo::topo_indices;

/// Ordered pair `(from, to)` identifying one dependency edge.
pub type EdgeKey = (IssueNumber, IssueNumber);

/// Result of critical path analysis.
///
/// Empty sets mean "no multi-node chain worth highlighting" — a valid
/// result for graphs with no nodes, no edges, or no path longer than zero
/// hops. A cyclic graph has no result at all (`None` from
/// [`critical_path`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalPath {
    /// Issues on the critical path.
    pub node_ids: BTreeSet<IssueNumber>,
    /// Edges on the critical path, as `(from, to)` pairs.
    pub edge_ids: BTreeSet<EdgeKey>,
    /// The chain in dependency order (sources first).
    pub path: Vec<IssueNumber>,
}

impl CriticalPath {
    /// The empty result: a valid, edge-free "path".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when no chain was highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Number of hops in the chain (edges, not nodes).
    #[must_use]
    pub fn hops(&self) -> usize {
        self.edge_ids.len()
    }
}

/// Compute the critical path of `graph`.
///
/// Returns `None` when the graph contains a cycle (the caller is expected
/// to surface a cycle warning rather than a path), and `Some(empty)` for
/// graphs with zero nodes, zero edges, or no chain longer than zero hops.
#[must_use]
pub fn critical_path(graph: &ReleaseGraph) -> Option<CriticalPath> {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return Some(CriticalPath::empty());
    }

    let Ok(topo) = topo_indices(graph) else {
        return None;
    };

    // --- Longest-path DP over the topological order ---
    let node_count = graph.node_count();
    let mut length: Vec<usize> = vec![0; node_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; node_count];

    for &u in &topo {
        let from_len = length[u.index()];
        for edge in graph.graph.edges_directed(u, Direction::Outgoing) {
            let v = edge.target().index();
            if from_len + 1 > length[v] {
                length[v] = from_len + 1;
                predecessor[v] = Some(u.index());
            }
        }
    }

    // --- Terminal selection: first node reaching the maximum wins ---
    let mut terminal: Option<usize> = None;
    let mut max_length = 0;
    for &v in &topo {
        if length[v.index()] > max_length {
            max_length = length[v.index()];
            terminal = Some(v.index());
        }
    }

    // No node has a predecessor-extending edge: nothing worth highlighting.
    let Some(terminal) = terminal else {
        return Some(CriticalPath::empty());
    };

    // --- Backward reconstruction along predecessor links ---
    let mut node_ids: BTreeSet<IssueNumber> = BTreeSet::new();
    let mut edge_ids: BTreeSet<EdgeKey> = BTreeSet::new();
    let mut chain: Vec<IssueNumber> = Vec::with_capacity(max_length + 1);

    let number_of = |index: usize| graph.graph[petgraph::graph::NodeIndex::new(index)];

    let mut current = terminal;
    loop {
        let current_number = number_of(current);
        node_ids.insert(current_number);
        chain.push(current_number);

        match predecessor[current] {
            Some(previous) => {
                edge_ids.insert((number_of(previous), current_number));
                current = previous;
            }
            None => break,
        }
    }

    chain.reverse();

    Some(CriticalPath {
        node_ids,
        edge_ids,
        path: chain,
    })
}
