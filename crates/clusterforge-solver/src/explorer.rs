//! First-improvement neighborhood exploration.
//!
//! A neighbor of an assignment moves exactly one class into another cluster.
//! Neighbors are visited class-major, cluster-minor, both ascending, and the
//! first one with a strictly better fitness is taken. The fixed scan order
//! makes runs reproducible for a given seed.

use clusterforge_core::{Assignment, ClusterSizes, Fitness, FitnessOracle};
use tracing::trace;

use crate::progress::ProgressListener;
use crate::scope::SearchScope;
use crate::strategy::SearchStrategy;

/// Outcome of one neighborhood visit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeighborhoodVisit {
    /// The solution was improved to this fitness.
    FoundBetter(Fitness),
    /// No neighbor improves on the solution: it is a local optimum.
    NoBetter,
    /// The evaluation budget ran out during the visit.
    Exhausted,
}

/// Explores the single-class reassignments of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodExplorer {
    cluster_count: usize,
}

impl NeighborhoodExplorer {
    /// Creates an explorer moving classes among `0..cluster_count`.
    pub fn new(cluster_count: usize) -> Self {
        Self { cluster_count }
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Visits the neighbors of `solution`.
    ///
    /// `solution` is first mirrored into the oracle and evaluated. If that
    /// fitness already beats the recorded best, it is reported without
    /// scanning. Otherwise each move is tried in the oracle, skipped without
    /// an evaluation when `strategy` rejects the resulting cluster sizes, and
    /// undone unless it strictly improves on the starting fitness. An
    /// improving move is committed into `solution`.
    ///
    /// The budget is checked after every evaluation; on exhaustion the oracle
    /// may be left holding a tentative move.
    pub fn visit_neighbors<O, St, P>(
        &self,
        solution: &mut Assignment,
        oracle: &mut O,
        strategy: &St,
        scope: &mut SearchScope<P>,
    ) -> NeighborhoodVisit
    where
        O: FitnessOracle + ?Sized,
        St: SearchStrategy + ?Sized,
        P: ProgressListener,
    {
        oracle.apply(solution);
        let starting_fitness = scope.evaluate(oracle);

        if scope.is_exhausted() {
            return NeighborhoodVisit::Exhausted;
        }

        if scope.improves_best(starting_fitness) {
            return NeighborhoodVisit::FoundBetter(starting_fitness);
        }

        let mut sizes = ClusterSizes::tally(oracle.solution(), self.cluster_count);

        for class in 0..solution.len() {
            let current = solution[class];

            for cluster in 0..self.cluster_count {
                if cluster == current {
                    continue;
                }

                oracle.move_class(class, cluster);
                sizes.relocate(current, cluster);

                if !strategy.is_feasible(&sizes) {
                    sizes.relocate(cluster, current);
                    oracle.move_class(class, current);
                    continue;
                }

                let neighbor_fitness = scope.evaluate(oracle);

                if scope.is_exhausted() {
                    return NeighborhoodVisit::Exhausted;
                }

                if neighbor_fitness > starting_fitness {
                    solution.set(class, cluster);
                    trace!(
                        event = "improving_move",
                        class = class,
                        from = current,
                        to = cluster,
                        fitness = neighbor_fitness,
                    );
                    return NeighborhoodVisit::FoundBetter(neighbor_fitness);
                }

                sizes.relocate(cluster, current);
                oracle.move_class(class, current);
            }
        }

        NeighborhoodVisit::NoBetter
    }
}
