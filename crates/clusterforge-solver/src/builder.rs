//! Builder module for constructing solvers from configuration
//!
//! Wires a [`SearchConfig`] to a ready [`HillClimbingSolver`]: the search
//! strategy, the seeded random source and the evaluation budget.

use clusterforge_config::{ConfigError, SearchConfig};
use clusterforge_core::ClusterForgeError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::progress::LoggingProgressListener;
use crate::solver::HillClimbingSolver;
use crate::strategy::ClusteringStrategy;

/// Solver produced by [`HillClimbingBuilder::from_config`].
pub type DefaultHillClimbingSolver =
    HillClimbingSolver<ClusteringStrategy, ChaCha8Rng, LoggingProgressListener>;

/// Errors raised while turning a configuration into a solver.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] ClusterForgeError),
}

/// Builder for constructing solvers and their parts from configuration.
pub struct HillClimbingBuilder;

impl HillClimbingBuilder {
    /// Builds a solver for a project of `class_count` classes.
    ///
    /// Every configuration error is reported here, before any evaluation.
    pub fn from_config(
        config: &SearchConfig,
        class_count: usize,
    ) -> Result<DefaultHillClimbingSolver, BuildError> {
        config.validate()?;
        let strategy = Self::strategy(config, class_count)?;
        let rng = Self::rng(config);

        Ok(HillClimbingSolver::new(
            strategy,
            rng,
            config.max_evaluations,
            LoggingProgressListener::new(),
        )
        .with_progress_interval(config.progress_interval))
    }

    /// Selects the size-constrained strategy when bounds are configured.
    pub fn strategy(
        config: &SearchConfig,
        class_count: usize,
    ) -> Result<ClusteringStrategy, ClusterForgeError> {
        match &config.cluster_size {
            Some(size) => {
                let bounds = size.bounds_for(class_count)?;
                ClusteringStrategy::size_constrained(class_count, bounds)
            }
            None => Ok(ClusteringStrategy::unconstrained(class_count)),
        }
    }

    /// Creates the random source, drawing a fresh seed if none is configured.
    pub fn rng(config: &SearchConfig) -> ChaCha8Rng {
        let seed = match config.random_seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                debug!(event = "random_seed", seed = seed);
                seed
            }
        };
        ChaCha8Rng::seed_from_u64(seed)
    }
}
