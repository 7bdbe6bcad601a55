#![forbid(unsafe_code)]
//! longpole-core library.
//!
//! Domain model and the pure computation layers of the release dependency
//! engine: canonical status resolution and dependency-reference extraction.
//! File loading for the tracker state and release manifest lives here too;
//! graph algorithms live in `longpole-graph`.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::LongpoleError`] for domain failures,
//!   `anyhow::Result` at I/O-heavy seams.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod state;
pub mod status;

/// Name of the per-project directory holding config, state, and manifest.
pub const PROJECT_DIR: &str = ".longpole";
