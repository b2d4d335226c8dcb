//! Search-level scope.
//!
//! Holds the state shared by every restart of a run: the global evaluation
//! counter, the best solution found so far and the restart counter.

use std::time::{Duration, Instant};

use clusterforge_core::{Assignment, Fitness, FitnessOracle};
use tracing::debug;

use crate::progress::ProgressListener;

/// The best solution recorded during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSolution {
    pub assignment: Assignment,
    pub fitness: Fitness,
    /// Restart during which the solution was found. Zero is the initial solution.
    pub restart: u64,
    /// Cluster count of the restart that produced the solution.
    pub cluster_count: usize,
}

/// Top-level scope for one hill climbing run.
#[derive(Debug)]
pub struct SearchScope<P: ProgressListener> {
    max_evaluations: u64,
    progress_interval: u64,
    evaluations: u64,
    restart_count: u64,
    best: Option<BestSolution>,
    listener: P,
    start_time: Option<Instant>,
}

impl<P: ProgressListener> SearchScope<P> {
    pub fn new(max_evaluations: u64, listener: P) -> Self {
        Self {
            max_evaluations,
            progress_interval: 0,
            evaluations: 0,
            restart_count: 0,
            best: None,
            listener,
            start_time: None,
        }
    }

    /// Reports progress every `interval` evaluations. Zero disables reports.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Resets the counters and the best solution for a new run.
    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.evaluations = 0;
        self.restart_count = 0;
        self.best = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Reads the fitness of the oracle's current state and counts it
    /// against the budget.
    pub fn evaluate<O: FitnessOracle + ?Sized>(&mut self, oracle: &mut O) -> Fitness {
        let fitness = oracle.calculate_fitness();
        self.evaluations += 1;

        if self.progress_interval > 0 && self.evaluations % self.progress_interval == 0 {
            let best = self.best_fitness().unwrap_or(fitness);
            self.listener.on_progress(self.evaluations, best);
        }

        fitness
    }

    /// Returns true once the evaluation counter has passed the budget.
    pub fn is_exhausted(&self) -> bool {
        self.evaluations > self.max_evaluations
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn max_evaluations(&self) -> u64 {
        self.max_evaluations
    }

    pub fn restart_count(&self) -> u64 {
        self.restart_count
    }

    pub fn best(&self) -> Option<&BestSolution> {
        self.best.as_ref()
    }

    pub fn best_fitness(&self) -> Option<Fitness> {
        self.best.as_ref().map(|b| b.fitness)
    }

    /// Returns true if `fitness` strictly beats the recorded best, or if
    /// nothing has been recorded yet.
    pub fn improves_best(&self, fitness: Fitness) -> bool {
        self.best_fitness().map_or(true, |best| fitness > best)
    }

    /// Records `assignment` as the new best if `fitness` strictly improves
    /// on the incumbent.
    pub fn update_best(
        &mut self,
        assignment: &Assignment,
        fitness: Fitness,
        cluster_count: usize,
    ) -> bool {
        if !self.improves_best(fitness) {
            return false;
        }

        match &mut self.best {
            Some(best) => {
                best.assignment.copy_from(assignment);
                best.fitness = fitness;
                best.restart = self.restart_count;
                best.cluster_count = cluster_count;
            }
            None => {
                self.best = Some(BestSolution {
                    assignment: assignment.clone(),
                    fitness,
                    restart: self.restart_count,
                    cluster_count,
                });
            }
        }

        debug!(
            event = "new_best",
            fitness = fitness,
            restart = self.restart_count,
            evaluations = self.evaluations,
        );
        self.listener
            .on_new_best(self.restart_count, self.evaluations, fitness);
        true
    }

    /// Counts a new restart and returns its index.
    pub fn begin_restart(&mut self, cluster_count: usize) -> u64 {
        self.restart_count += 1;
        debug!(
            event = "restart",
            restart = self.restart_count,
            cluster_count = cluster_count,
            evaluations = self.evaluations,
        );
        self.listener.on_restart(self.restart_count, cluster_count);
        self.restart_count
    }

    pub fn take_best(&mut self) -> Option<BestSolution> {
        self.best.take()
    }

    pub fn listener(&self) -> &P {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut P {
        &mut self.listener
    }

    pub fn into_listener(self) -> P {
        self.listener
    }
}
