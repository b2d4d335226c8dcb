//! ClusterForge Solver Engine
//!
//! This crate provides the hill climbing search including:
//! - Random and size-constrained solution generators
//! - Search strategies (unconstrained, size-constrained)
//! - First-improvement neighborhood exploration
//! - Local search and random restarts under a global evaluation budget
//! - Progress listeners for monitoring
//! - Configuration wiring (builder module)

pub mod builder;
pub mod explorer;
pub mod generator;
pub mod local_search;
pub mod progress;
pub mod result;
pub mod scope;
pub mod solver;
pub mod strategy;

pub use builder::{BuildError, DefaultHillClimbingSolver, HillClimbingBuilder};
pub use explorer::{NeighborhoodExplorer, NeighborhoodVisit};
pub use generator::{generate_random, Candidate, ConstrainedGenerator, RandomGenerator};
pub use local_search::LocalSearchDriver;
pub use progress::{
    CountingProgressListener, LoggingProgressListener, NoProgress, ProgressListener,
    RecordingProgressListener,
};
pub use result::HillClimbingResult;
pub use scope::{BestSolution, SearchScope};
pub use solver::HillClimbingSolver;
pub use strategy::{ClusteringStrategy, SearchStrategy, SizeConstrained, Unconstrained};
