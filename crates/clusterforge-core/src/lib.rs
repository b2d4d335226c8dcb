//! ClusterForge Core - Core types and traits for module clustering search
//!
//! This crate provides the fundamental abstractions for ClusterForge:
//! - `Assignment` mapping each class to the cluster it belongs to
//! - Cluster size tallies and min/max size bounds
//! - The `FitnessOracle` trait wrapping the modularization quality metric
//! - The `RandomSource` trait used by solution generators

pub mod assignment;
pub mod bounds;
pub mod error;
pub mod oracle;
pub mod random;

pub use assignment::{Assignment, Fitness};
pub use bounds::{ClusterSizeBounds, ClusterSizes};
pub use error::{ClusterForgeError, Result};
pub use oracle::FitnessOracle;
pub use random::RandomSource;
