//! Hill climbing result.

use std::fmt;
use std::time::Duration;

use clusterforge_core::{Assignment, Fitness};

/// Outcome of a hill climbing run.
#[derive(Debug, Clone, PartialEq)]
pub struct HillClimbingResult {
    /// Best assignment found across all restarts.
    pub best_solution: Assignment,
    /// Fitness of `best_solution`.
    pub fitness: Fitness,
    /// Number of restarts executed.
    pub restart_count: u64,
    /// Restart during which `best_solution` was found.
    pub restart_best_found: u64,
    /// Fitness evaluations spent, including the one that hit the budget.
    pub evaluations: u64,
    /// Cluster count of the restart that produced `best_solution`.
    pub cluster_count: usize,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl HillClimbingResult {
    /// Number of distinct clusters actually used by the best solution.
    pub fn used_cluster_count(&self) -> usize {
        self.best_solution
            .cluster_sizes(self.cluster_count)
            .iter()
            .filter(|&size| size > 0)
            .count()
    }
}

impl fmt::Display for HillClimbingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fitness={} restarts={} best_found_at={} evaluations={}",
            self.best_solution,
            self.fitness,
            self.restart_count,
            self.restart_best_found,
            self.evaluations
        )
    }
}
