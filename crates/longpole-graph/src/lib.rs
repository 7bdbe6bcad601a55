#![forbid(unsafe_code)]
//! longpole-graph library.
//!
//! # Overview
//!
//! Builds and analyzes the dependency graph of one release's issues. Every
//! function here is a pure, synchronous computation over in-memory inputs;
//! fetching issue data is the caller's concern.
//!
//! ## Pipeline
//!
//! ```text
//! fetched issues + scope set + tracker state
//!        ↓  build::ReleaseGraph::build()
//! ReleaseGraph (DiGraph with possible cycles)
//!        ↓  topo::topo_sort()                 — Kahn's algorithm
//! topological order, or CycleDetected
//!        ↓  critical_path::critical_path()    — longest-path DP
//! CriticalPath { node set, edge set, chain }, or None on cycle
//!        ↓  summary::GraphSummary::new()
//! GraphSummary (issue count, edge count, has-edges, cycle-detected)
//! ```
//!
//! Graphs are immutable once built: any input change means a full rebuild,
//! never an in-place patch, so stale-edge bugs cannot arise.
//!
//! # Conventions
//!
//! - **Errors**: a cycle is a first-class value ([`topo::CycleDetected`] /
//!   `None` from the critical path), not a failure.
//! - **Logging**: `tracing` macros.

pub mod build;
pub mod critical_path;
pub mod cycles;
pub mod summary;
pub mod topo;

// Re-export primary types at crate level for convenience.
pub use build::{GraphEdge, GraphNode, ReleaseGraph};
pub use critical_path::{CriticalPath, EdgeKey, critical_path};
pub use cycles::find_cycles;
pub use summary::GraphSummary;
pub use topo::{CycleDetected, topo_sort};
