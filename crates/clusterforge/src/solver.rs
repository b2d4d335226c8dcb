//! Solver entry points that hide all internal wiring.

use std::path::Path;

use clusterforge_config::SearchConfig;
use clusterforge_core::FitnessOracle;
use clusterforge_solver::{BuildError, HillClimbingBuilder, HillClimbingResult};

/// Clusters the `class_count` classes tracked by `oracle`.
///
/// The configuration selects the budget, the seed and optional cluster
/// size bounds. Invalid bounds are reported before any evaluation.
pub fn run_hill_climbing<O>(
    oracle: &mut O,
    class_count: usize,
    config: &SearchConfig,
) -> Result<HillClimbingResult, BuildError>
where
    O: FitnessOracle + ?Sized,
{
    let mut solver = HillClimbingBuilder::from_config(config, class_count)?;
    Ok(solver.solve(oracle)?)
}

/// Like [`run_hill_climbing`], reading the configuration from a TOML file.
pub fn run_hill_climbing_from_file<O>(
    oracle: &mut O,
    class_count: usize,
    path: impl AsRef<Path>,
) -> Result<HillClimbingResult, BuildError>
where
    O: FitnessOracle + ?Sized,
{
    let config = SearchConfig::load(path)?;
    run_hill_climbing(oracle, class_count, &config)
}
