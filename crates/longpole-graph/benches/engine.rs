//! Engine benchmarks: graph construction and critical-path computation on
//! layered synthetic releases.
//!
//! Run with:
//! ```sh
//! cargo bench --bench engine
//! ```

use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use longpole_core::extract::DependencyExtractor;
use longpole_core::model::{ActiveWork, FetchedIssue, RemoteState};
use longpole_core::status::StatusSources;
use longpole_graph::{ReleaseGraph, critical_path};

const SIZES: &[usize] = &[10, 100, 500];

/// Layered DAG: `size` issues in layers of 5, each depending on up to two
/// issues from the previous layer.
fn synthetic_release(size: usize) -> Vec<FetchedIssue> {
    (0..size)
        .map(|i| {
            let number = (i + 1) as u64;
            let layer = i / 5;
            let body = if layer == 0 {
                None
            } else {
                let a = (layer - 1) * 5 + i % 5 + 1;
                let b = (layer - 1) * 5 + (i + 2) % 5 + 1;
                Some(format!("depends on #{a} and blocked by #{b}"))
            };
            FetchedIssue {
                number,
                title: format!("issue {number}"),
                body,
                state: RemoteState::Open,
            }
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph.build");
    let extractor = DependencyExtractor::new();
    let work = ActiveWork::new();
    let sources = StatusSources {
        active_work: &work,
        recent_issues: &[],
    };

    for &size in SIZES {
        let issues = synthetic_release(size);
        let scope: BTreeSet<u64> = issues.iter().map(|i| i.number).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &issues, |b, issues| {
            b.iter(|| {
                let graph = ReleaseGraph::build(issues, &scope, &extractor, &sources);
                black_box(graph.edge_count())
            });
        });
    }

    group.finish();
}

fn bench_critical_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph.critical_path");
    let extractor = DependencyExtractor::new();
    let work = ActiveWork::new();
    let sources = StatusSources {
        active_work: &work,
        recent_issues: &[],
    };

    for &size in SIZES {
        let issues = synthetic_release(size);
        let scope: BTreeSet<u64> = issues.iter().map(|i| i.number).collect();
        let graph = ReleaseGraph::build(&issues, &scope, &extractor, &sources);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(critical_path(graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_critical_path);
criterion_main!(benches);
