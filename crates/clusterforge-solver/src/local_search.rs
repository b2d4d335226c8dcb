//! Local search driver.

use clusterforge_core::{Assignment, FitnessOracle};

use crate::explorer::{NeighborhoodExplorer, NeighborhoodVisit};
use crate::progress::ProgressListener;
use crate::scope::SearchScope;
use crate::strategy::SearchStrategy;

/// Climbs from a solution until it reaches a local optimum or the budget
/// runs out, recording every global improvement in the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSearchDriver {
    explorer: NeighborhoodExplorer,
}

impl LocalSearchDriver {
    /// Creates a driver for solutions using `cluster_count` clusters.
    pub fn new(cluster_count: usize) -> Self {
        Self {
            explorer: NeighborhoodExplorer::new(cluster_count),
        }
    }

    pub fn explorer(&self) -> &NeighborhoodExplorer {
        &self.explorer
    }

    /// Improves `solution` in place.
    ///
    /// Returns true when the search converged to a local optimum and false
    /// when the evaluation budget was exhausted.
    pub fn local_search<O, St, P>(
        &self,
        solution: &mut Assignment,
        oracle: &mut O,
        strategy: &St,
        scope: &mut SearchScope<P>,
    ) -> bool
    where
        O: FitnessOracle + ?Sized,
        St: SearchStrategy + ?Sized,
        P: ProgressListener,
    {
        loop {
            match self
                .explorer
                .visit_neighbors(solution, oracle, strategy, scope)
            {
                NeighborhoodVisit::FoundBetter(fitness) => {
                    scope.update_best(solution, fitness, self.explorer.cluster_count());
                }
                NeighborhoodVisit::NoBetter => return true,
                NeighborhoodVisit::Exhausted => return false,
            }
        }
    }
}
