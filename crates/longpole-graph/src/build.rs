//! Graph construction from fetched release issues.
//!
//! # Overview
//!
//! One node per issue in the selected release, one directed edge per
//! dependency reference extracted from an issue body. This is the only place
//! edges are created; nothing downstream mutates the edge set.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "B depends on A" — A must be completed before B can
//! start. A body reading `depends on #3` in issue #5 therefore produces the
//! edge `3 → 5`.
//!
//! ## Scope
//!
//! The extractor is run with the release's issue set as its scope, so every
//! edge endpoint belongs to the release. References to outside issues are
//! discarded at extraction time, keeping cycle and critical-path results
//! strictly release-local.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::debug;

use longpole_core::extract::DependencyExtractor;
use longpole_core::model::{FetchedIssue, IssueNumber};
use longpole_core::status::{Status, StatusSources, resolve_status};

/// One graph node: an issue with its resolved canonical status.
///
/// Created once at build time and never mutated; graphs are rebuilt, not
/// patched, on any input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub number: IssueNumber,
    pub title: String,
    pub status: Status,
}

/// One dependency edge: `to` depends on `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: IssueNumber,
    pub to: IssueNumber,
}

/// The dependency graph of one release selection.
///
/// Nodes and edges are exposed in build order; the petgraph mirror drives
/// the topological sort, cycle enumeration, and critical-path computation.
#[derive(Debug, Clone)]
pub struct ReleaseGraph {
    /// Nodes in release-manifest order.
    pub nodes: Vec<GraphNode>,
    /// Edges in extraction order (`dependency → dependent`).
    pub edges: Vec<GraphEdge>,
    /// petgraph mirror: node weights are issue numbers.
    pub graph: DiGraph<IssueNumber, ()>,
    /// Mapping from issue number to petgraph `NodeIndex`.
    pub node_map: HashMap<IssueNumber, NodeIndex>,
}

impl ReleaseGraph {
    /// Build the graph for one release selection.
    ///
    /// One node per entry of `issues` (status resolved from `sources`), one
    /// edge per reference the extractor finds in an issue body under
    /// `scope`. An issue with no body contributes zero edges. An empty
    /// issue set produces an empty graph — not an error.
    ///
    /// Edges are deduplicated by construction: the extractor collapses
    /// repeated mentions within a body, and the dependent side is unique
    /// per issue. Self-loops are valid edges (and immediate cycles).
    #[must_use]
    pub fn build(
        issues: &[FetchedIssue],
        scope: &BTreeSet<IssueNumber>,
        extractor: &DependencyExtractor,
        sources: &StatusSources<'_>,
    ) -> Self {
        let mut graph = DiGraph::<IssueNumber, ()>::new();
        let mut node_map: HashMap<IssueNumber, NodeIndex> = HashMap::with_capacity(issues.len());
        let mut nodes: Vec<GraphNode> = Vec::with_capacity(issues.len());

        for issue in issues {
            let idx = graph.add_node(issue.number);
            node_map.insert(issue.number, idx);
            nodes.push(GraphNode {
                number: issue.number,
                title: issue.title.clone(),
                status: resolve_status(issue, sources),
            });
        }

        let mut edges: Vec<GraphEdge> = Vec::new();
        for issue in issues {
            let Some(body) = issue.body.as_deref() else {
                continue;
            };
            let Some(&to_idx) = node_map.get(&issue.number) else {
                continue;
            };
            for dependency in extractor.extract(body, scope) {
                // Scope membership does not guarantee a node: the caller may
                // pass a scope wider than the fetched issue list. An edge
                // without both endpoints would corrupt every downstream
                // computation, so such references are dropped here too.
                let Some(&from_idx) = node_map.get(&dependency) else {
                    debug!(
                        dependency,
                        dependent = issue.number,
                        "dropping reference to unfetched issue"
                    );
                    continue;
                };
                graph.add_edge(from_idx, to_idx, ());
                edges.push(GraphEdge {
                    from: dependency,
                    to: issue.number,
                });
            }
        }

        Self {
            nodes,
            edges,
            graph,
            node_map,
        }
    }

    /// Number of nodes (issues) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges (dependency relationships) in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for an issue number.
    #[must_use]
    pub fn node_index(&self, number: IssueNumber) -> Option<NodeIndex> {
        self.node_map.get(&number).copied()
    }

    /// Issue number for a petgraph node.
    #[must_use]
    pub fn issue_number(&self, idx: NodeIndex) -> Option<IssueNumber> {
        self.graph.node_weight(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ReleaseGraph;
    use longpole_core::extract::DependencyExtractor;
    use longpole_core::model::{ActiveWork, FetchedIssue, RemoteState};
    use longpole_core::status::{Status, StatusSources};
    use std::collections::BTreeSet;

    fn issue(number: u64, body: Option<&str>) -> FetchedIssue {
        FetchedIssue {
            number,
            title: format!("issue {number}"),
            body: body.map(str::to_string),
            state: RemoteState::Open,
        }
    }

    fn build(issues: &[FetchedIssue]) -> ReleaseGraph {
        let scope: BTreeSet<u64> = issues.iter().map(|i| i.number).collect();
        let work = ActiveWork::new();
        let sources = StatusSources {
            active_work: &work,
            recent_issues: &[],
        };
        ReleaseGraph::build(issues, &scope, &DependencyExtractor::new(), &sources)
    }

    #[test]
    fn empty_issue_set_produces_empty_graph() {
        let graph = build(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn issues_without_bodies_are_nodes_only() {
        let graph = build(&[issue(1, None), issue(2, None)]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_index(1).is_some());
        assert!(graph.node_index(2).is_some());
    }

    #[test]
    fn dependency_mention_creates_edge_from_dependency_to_dependent() {
        // Issue 5 depends on issue 3 → edge 3 → 5.
        let graph = build(&[issue(3, None), issue(5, Some("depends on #3"))]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].from, 3);
        assert_eq!(graph.edges[0].to, 5);

        let from = graph.node_index(3).expect("node 3");
        let to = graph.node_index(5).expect("node 5");
        assert!(graph.graph.contains_edge(from, to));
        assert!(!graph.graph.contains_edge(to, from));
    }

    #[test]
    fn repeated_mentions_yield_one_edge() {
        let graph = build(&[
            issue(3, None),
            issue(5, Some("blocked by #3 and depends on #3")),
        ]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn out_of_scope_references_produce_no_edges() {
        let graph = build(&[issue(7, Some("requires #99"))]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn self_reference_is_a_valid_self_loop() {
        let graph = build(&[issue(4, Some("after #4"))]);
        assert_eq!(graph.edge_count(), 1);
        let idx = graph.node_index(4).expect("node 4");
        assert!(graph.graph.contains_edge(idx, idx));
    }

    #[test]
    fn statuses_come_from_the_resolver() {
        let closed = FetchedIssue {
            number: 2,
            title: "closed one".into(),
            body: None,
            state: RemoteState::Closed,
        };
        let graph = build(&[issue(1, None), closed]);
        assert_eq!(graph.nodes[0].status, Status::Open);
        assert_eq!(graph.nodes[1].status, Status::Closed);
    }

    #[test]
    fn nodes_follow_manifest_order() {
        let graph = build(&[issue(9, None), issue(2, None), issue(5, None)]);
        let order: Vec<u64> = graph.nodes.iter().map(|n| n.number).collect();
        assert_eq!(order, vec![9, 2, 5]);
    }

    #[test]
    fn scope_wider_than_fetched_issues_drops_dangling_edges() {
        // Scope admits 8, but 8 was never fetched; the reference is dropped.
        let scope: BTreeSet<u64> = [5, 8].into_iter().collect();
        let issues = vec![issue(5, Some("depends on #8"))];
        let work = ActiveWork::new();
        let sources = StatusSources {
            active_work: &work,
            recent_issues: &[],
        };
        let graph = ReleaseGraph::build(&issues, &scope, &DependencyExtractor::new(), &sources);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
