//! Cycle enumeration for diagnostics.
//!
//! The topological sort only reports *that* a cycle exists; when it does,
//! the caller wants to tell the user *which* issues are mutually blocking.
//! Strongly connected components answer that: every SCC with more than one
//! member is a cycle, and a self-loop is a one-member cycle.

use petgraph::algo::tarjan_scc;

use longpole_core::model::IssueNumber;

use crate::build::ReleaseGraph;

/// Find all dependency cycles in `graph`.
///
/// Each entry is the sorted issue-number list of one strongly connected
/// component; self-loops are reported as one-element cycles. The outer list
/// is sorted for stable output.
#[must_use]
pub fn find_cycles(graph: &ReleaseGraph) -> Vec<Vec<IssueNumber>> {
    let mut cycles: Vec<Vec<IssueNumber>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|&node| graph.graph.find_edge(node, node).is_some())
        })
        .map(|component| {
            let mut numbers: Vec<IssueNumber> = component
                .into_iter()
                .filter_map(|idx| graph.issue_number(idx))
                .collect();
            numbers.sort_unstable();
            numbers
        })
        .collect();

    cycles.sort_unstable();
    cycles
}
