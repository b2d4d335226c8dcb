//! Shared test fixtures for ClusterForge crates.
//!
//! This crate provides fitness oracles and small dependency graphs for testing.
//!
//! - [`mq`] - Modularization quality oracle over a dependency graph
//! - [`oracle`] - Closure-backed and call-counting oracles
//! - [`projects`] - Hand-built dependency graphs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! clusterforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use clusterforge_test::mq::{DependencyGraph, TurboMqOracle};
//! use clusterforge_test::projects::two_cliques;
//! ```

pub mod mq;
pub mod oracle;
pub mod projects;

pub use mq::{DependencyGraph, TurboMqOracle};
pub use oracle::{CountingOracle, FnOracle};
