//! Hill climbing with random restarts.
//!
//! Logging levels:
//! - **INFO**: Solve start/end, periodic progress (via `LoggingProgressListener`)
//! - **DEBUG**: Restarts and best solution improvements
//! - **TRACE**: Individual improving moves

use std::fmt::{self, Debug};

use clusterforge_core::{ClusterForgeError, FitnessOracle, RandomSource, Result};
use tracing::info;

use crate::generator::Candidate;
use crate::local_search::LocalSearchDriver;
use crate::progress::ProgressListener;
use crate::result::HillClimbingResult;
use crate::scope::{BestSolution, SearchScope};
use crate::strategy::SearchStrategy;

/// Hill climbing search with random restarts.
///
/// A run evaluates one generated solution as the initial best, then
/// alternates local search and restarts from freshly generated solutions
/// until the evaluation budget is spent. All restarts share one budget.
///
/// # Type Parameters
/// * `St` - The search strategy (unconstrained or size-constrained)
/// * `R` - The random source
/// * `P` - The progress listener
///
/// # Example
///
/// ```
/// use clusterforge_core::{Fitness, FitnessOracle};
/// use clusterforge_solver::progress::NoProgress;
/// use clusterforge_solver::strategy::Unconstrained;
/// use clusterforge_solver::HillClimbingSolver;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// struct Together(Vec<usize>);
///
/// impl FitnessOracle for Together {
///     fn move_class(&mut self, class: usize, cluster: usize) {
///         self.0[class] = cluster;
///     }
///     fn calculate_fitness(&mut self) -> Fitness {
///         self.0.iter().filter(|&&c| c == self.0[0]).count() as Fitness
///     }
///     fn solution(&self) -> &[usize] {
///         &self.0
///     }
/// }
///
/// let mut solver = HillClimbingSolver::new(
///     Unconstrained::new(4),
///     ChaCha8Rng::seed_from_u64(1),
///     500,
///     NoProgress,
/// );
/// let result = solver.solve(&mut Together(vec![0; 4])).unwrap();
///
/// assert_eq!(result.best_solution.len(), 4);
/// assert_eq!(result.fitness, 4.0);
/// ```
pub struct HillClimbingSolver<St, R, P>
where
    St: SearchStrategy,
    R: RandomSource,
    P: ProgressListener,
{
    strategy: St,
    rng: R,
    scope: SearchScope<P>,
}

impl<St, R, P> Debug for HillClimbingSolver<St, R, P>
where
    St: SearchStrategy,
    R: RandomSource,
    P: ProgressListener,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HillClimbingSolver")
            .field("strategy", &self.strategy)
            .field("scope", &self.scope)
            .finish()
    }
}

impl<St, R, P> HillClimbingSolver<St, R, P>
where
    St: SearchStrategy,
    R: RandomSource,
    P: ProgressListener,
{
    /// Creates a solver spending at most `max_evaluations` evaluations per run.
    pub fn new(strategy: St, rng: R, max_evaluations: u64, listener: P) -> Self {
        Self {
            strategy,
            rng,
            scope: SearchScope::new(max_evaluations, listener),
        }
    }

    /// Reports progress every `interval` evaluations. Zero disables reports.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.scope = self.scope.with_progress_interval(interval);
        self
    }

    pub fn strategy(&self) -> &St {
        &self.strategy
    }

    pub fn scope(&self) -> &SearchScope<P> {
        &self.scope
    }

    pub fn listener(&self) -> &P {
        self.scope.listener()
    }

    pub fn into_listener(self) -> P {
        self.scope.into_listener()
    }

    /// Runs the search against `oracle` and returns the best solution found.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterForgeError::ClassCountMismatch`] before any
    /// evaluation if the oracle does not track the strategy's class count.
    pub fn solve<O: FitnessOracle + ?Sized>(&mut self, oracle: &mut O) -> Result<HillClimbingResult> {
        let class_count = self.strategy.class_count();
        if oracle.class_count() != class_count {
            return Err(ClusterForgeError::ClassCountMismatch {
                expected: class_count,
                actual: oracle.class_count(),
            });
        }

        self.scope.start_solving();
        info!(
            event = "solve_start",
            strategy = self.strategy.strategy_name(),
            class_count = class_count as u64,
            max_evaluations = self.scope.max_evaluations(),
        );

        let Candidate {
            assignment: mut solution,
            mut cluster_count,
        } = self.strategy.generate_solution(&mut self.rng);
        oracle.apply(&solution);
        let fitness = self.scope.evaluate(oracle);
        self.scope.update_best(&solution, fitness, cluster_count);
        let initial = BestSolution {
            assignment: solution.clone(),
            fitness,
            restart: 0,
            cluster_count,
        };

        loop {
            let driver = LocalSearchDriver::new(cluster_count);
            if !driver.local_search(&mut solution, oracle, &self.strategy, &mut self.scope) {
                break;
            }

            let candidate = self.strategy.generate_solution(&mut self.rng);
            self.scope.begin_restart(candidate.cluster_count);
            solution = candidate.assignment;
            cluster_count = candidate.cluster_count;
        }

        let duration = self.scope.elapsed();
        let restart_count = self.scope.restart_count();
        let evaluations = self.scope.evaluations();
        // the initial solution stands unless a later one beat it
        let best = self.scope.take_best().unwrap_or(initial);

        info!(
            event = "solve_end",
            fitness = best.fitness,
            restarts = restart_count,
            restart_best_found = best.restart,
            evaluations = evaluations,
            duration_ms = duration.as_millis() as u64,
        );

        Ok(HillClimbingResult {
            best_solution: best.assignment,
            fitness: best.fitness,
            restart_count,
            restart_best_found: best.restart,
            evaluations,
            cluster_count: best.cluster_count,
            duration,
        })
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
