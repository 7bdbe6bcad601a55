//! Property tests for the topological sort.
//!
//! Random DAGs are generated with edges oriented low → high issue number,
//! which guarantees acyclicity by construction; the sort must then return a
//! permutation of all nodes that respects every edge.

use std::collections::BTreeSet;

use proptest::prelude::*;

use longpole_core::extract::DependencyExtractor;
use longpole_core::model::{ActiveWork, FetchedIssue, RemoteState};
use longpole_core::status::StatusSources;
use longpole_graph::{ReleaseGraph, critical_path, topo_sort};

const NODE_COUNT: u64 = 12;

/// Edge set over nodes 1..=NODE_COUNT with `from < to` (acyclic).
fn arb_dag_edges() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec(
        (1..NODE_COUNT, 1..NODE_COUNT).prop_filter_map("no self/backward edges", |(a, b)| {
            (a != b).then(|| (a.min(b), a.max(b) + 1))
        }),
        0..30,
    )
}

fn graph_from_edges(edges: &[(u64, u64)]) -> ReleaseGraph {
    let issues: Vec<FetchedIssue> = (1..=NODE_COUNT + 1)
        .map(|number| {
            let deps: Vec<String> = edges
                .iter()
                .filter(|(_, to)| *to == number)
                .map(|(from, _)| format!("depends on #{from}"))
                .collect();
            FetchedIssue {
                number,
                title: format!("issue {number}"),
                body: (!deps.is_empty()).then(|| deps.join(", ")),
                state: RemoteState::Open,
            }
        })
        .collect();
    let scope: BTreeSet<u64> = issues.iter().map(|i| i.number).collect();
    let work = ActiveWork::new();
    let sources = StatusSources {
        active_work: &work,
        recent_issues: &[],
    };
    ReleaseGraph::build(&issues, &scope, &DependencyExtractor::new(), &sources)
}

proptest! {
    #[test]
    fn acyclic_graphs_sort_to_a_valid_permutation(edges in arb_dag_edges()) {
        let graph = graph_from_edges(&edges);
        let order = topo_sort(&graph).expect("generated graphs are acyclic");

        // Permutation of all nodes.
        let as_set: BTreeSet<u64> = order.iter().copied().collect();
        prop_assert_eq!(order.len(), graph.node_count());
        prop_assert_eq!(as_set.len(), graph.node_count());

        // Every edge's source precedes its target.
        let position = |n: u64| order.iter().position(|&x| x == n).expect("present");
        for edge in &graph.edges {
            prop_assert!(position(edge.from) < position(edge.to));
        }
    }

    #[test]
    fn critical_path_length_is_bounded_by_node_count(edges in arb_dag_edges()) {
        let graph = graph_from_edges(&edges);
        let path = critical_path(&graph).expect("acyclic");
        prop_assert!(path.path.len() <= graph.node_count());
        if !path.path.is_empty() {
            prop_assert_eq!(path.edge_ids.len(), path.path.len() - 1);
        }
    }

    #[test]
    fn adding_a_back_edge_makes_the_sort_fail(edges in arb_dag_edges()) {
        prop_assume!(!edges.is_empty());
        let (from, to) = edges[0];

        // Rebuild with one reversed duplicate of the first edge: to → from
        // closes a cycle with from → to.
        let issues: Vec<FetchedIssue> = (1..=NODE_COUNT + 1)
            .map(|number| {
                let mut deps: Vec<String> = edges
                    .iter()
                    .filter(|(_, t)| *t == number)
                    .map(|(f, _)| format!("depends on #{f}"))
                    .collect();
                if number == from {
                    deps.push(format!("depends on #{to}"));
                }
                FetchedIssue {
                    number,
                    title: format!("issue {number}"),
                    body: (!deps.is_empty()).then(|| deps.join(", ")),
                    state: RemoteState::Open,
                }
            })
            .collect();
        let scope: BTreeSet<u64> = issues.iter().map(|i| i.number).collect();
        let work = ActiveWork::new();
        let sources = StatusSources {
            active_work: &work,
            recent_issues: &[],
        };
        let graph = ReleaseGraph::build(&issues, &scope, &DependencyExtractor::new(), &sources);

        prop_assert!(topo_sort(&graph).is_err());
        prop_assert!(critical_path(&graph).is_none());
    }
}
