//! Topological sort with cycle detection (Kahn's algorithm).
//!
//! A cycle is not an exception here: it is a first-class return value the
//! caller interprets as "critical path unavailable". The sort is
//! deterministic for a given input — the zero-in-degree queue is seeded and
//! drained FIFO in node-list order, which itself follows the release
//! manifest.

use std::collections::VecDeque;

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use thiserror::Error;

use longpole_core::model::IssueNumber;

use crate::build::ReleaseGraph;

/// The graph contains at least one dependency cycle.
///
/// `remaining` lists the issues left unprocessed when the sort stalled —
/// a superset of the cycle members (cycles plus everything downstream of
/// them).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dependency cycle detected among {} issue(s)", remaining.len())]
pub struct CycleDetected {
    pub remaining: Vec<IssueNumber>,
}

/// Topologically sort the graph, or report a cycle.
///
/// Every edge's source precedes its target in the returned order. A
/// self-loop keeps its node's in-degree above zero forever, so it is
/// reported as a cycle like any longer loop.
///
/// # Errors
///
/// Returns [`CycleDetected`] when the graph is cyclic; never a partial
/// order.
pub fn topo_sort(graph: &ReleaseGraph) -> Result<Vec<IssueNumber>, CycleDetected> {
    topo_indices(graph).map(|order| {
        order
            .iter()
            .filter_map(|&idx| graph.issue_number(idx))
            .collect()
    })
}

/// Kahn's algorithm over petgraph node indices.
///
/// Node indices are assigned in insertion order, so iterating them seeds
/// the queue deterministically.
pub(crate) fn topo_indices(graph: &ReleaseGraph) -> Result<Vec<NodeIndex>, CycleDetected> {
    let g = &graph.graph;
    let node_count = g.node_count();

    let mut in_degree: Vec<usize> = vec![0; node_count];
    for edge in g.edge_references() {
        in_degree[edge.target().index()] += 1;
    }

    let mut queue: VecDeque<NodeIndex> = g
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    let mut order: Vec<NodeIndex> = Vec::with_capacity(node_count);
    while let Some(current) = queue.pop_front() {
        order.push(current);
        for edge in g.edges_directed(current, Direction::Outgoing) {
            let successor = edge.target().index();
            in_degree[successor] -= 1;
            if in_degree[successor] == 0 {
                queue.push_back(edge.target());
            }
        }
    }

    if order.len() < node_count {
        let remaining = g
            .node_indices()
            .filter(|idx| in_degree[idx.index()] > 0)
            .filter_map(|idx| graph.issue_number(idx))
            .collect();
        return Err(CycleDetected { remaining });
    }

    Ok(order)
}
