//! ClusterForge - Hill Climbing Module Clustering in Rust
//!
//! Partitions the classes of a program into clusters that maximize a
//! caller-supplied fitness, typically a modularization quality metric.
//!
//! # Example
//!
//! ```rust
//! use clusterforge::prelude::*;
//!
//! struct Pairs(Vec<usize>);
//!
//! impl FitnessOracle for Pairs {
//!     fn move_class(&mut self, class: usize, cluster: usize) {
//!         self.0[class] = cluster;
//!     }
//!     fn calculate_fitness(&mut self) -> Fitness {
//!         // rewards classes 2k and 2k+1 sharing a cluster
//!         self.0.chunks(2).filter(|p| p[0] == p[1]).count() as Fitness
//!     }
//!     fn solution(&self) -> &[usize] {
//!         &self.0
//!     }
//! }
//!
//! let config = SearchConfig::new()
//!     .with_max_evaluations(2_000)
//!     .with_random_seed(7)
//!     .with_cluster_size(2, 2);
//! let result = run_hill_climbing(&mut Pairs(vec![0; 4]), 4, &config).unwrap();
//!
//! assert_eq!(result.fitness, 2.0);
//! assert_eq!(result.used_cluster_count(), 2);
//! ```

// Data model and collaborator traits
pub use clusterforge_core::{
    Assignment, ClusterForgeError, ClusterSizeBounds, ClusterSizes, Fitness, FitnessOracle,
    RandomSource,
};

// Configuration
pub use clusterforge_config::{ClusterSizeConfig, ConfigError, SearchConfig};

// Search engine
pub use clusterforge_solver::{
    BuildError, ClusteringStrategy, CountingProgressListener, DefaultHillClimbingSolver,
    HillClimbingBuilder, HillClimbingResult, HillClimbingSolver, LoggingProgressListener,
    NoProgress, ProgressListener, RecordingProgressListener, SearchStrategy, SizeConstrained,
    Unconstrained,
};

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{run_hill_climbing, run_hill_climbing_from_file};

pub mod prelude {
    pub use super::{run_hill_climbing, run_hill_climbing_from_file};
    pub use super::{Assignment, Fitness, FitnessOracle};
    pub use super::{ClusterSizeBounds, HillClimbingResult, SearchConfig};
}
