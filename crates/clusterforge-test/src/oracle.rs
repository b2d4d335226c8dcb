//! Closure-backed and call-counting oracles.

use std::fmt::{self, Debug};

use clusterforge_core::{Fitness, FitnessOracle};

/// Oracle whose fitness is an arbitrary function of the current solution.
pub struct FnOracle<F>
where
    F: FnMut(&[usize]) -> Fitness,
{
    solution: Vec<usize>,
    fitness: F,
}

impl<F> FnOracle<F>
where
    F: FnMut(&[usize]) -> Fitness,
{
    /// Creates an oracle with every class in cluster 0.
    pub fn new(class_count: usize, fitness: F) -> Self {
        Self {
            solution: vec![0; class_count],
            fitness,
        }
    }
}

impl<F> Debug for FnOracle<F>
where
    F: FnMut(&[usize]) -> Fitness,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOracle")
            .field("solution", &self.solution)
            .finish()
    }
}

impl<F> FitnessOracle for FnOracle<F>
where
    F: FnMut(&[usize]) -> Fitness,
{
    fn move_class(&mut self, class: usize, cluster: usize) {
        self.solution[class] = cluster;
    }

    fn calculate_fitness(&mut self) -> Fitness {
        (self.fitness)(&self.solution)
    }

    fn solution(&self) -> &[usize] {
        &self.solution
    }
}

/// Wraps an oracle and counts the calls it receives.
#[derive(Debug, Clone)]
pub struct CountingOracle<O> {
    inner: O,
    evaluations: u64,
    moves: u64,
}

impl<O: FitnessOracle> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            evaluations: 0,
            moves: 0,
        }
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: FitnessOracle> FitnessOracle for CountingOracle<O> {
    fn move_class(&mut self, class: usize, cluster: usize) {
        self.moves += 1;
        self.inner.move_class(class, cluster);
    }

    fn calculate_fitness(&mut self) -> Fitness {
        self.evaluations += 1;
        self.inner.calculate_fitness()
    }

    fn solution(&self) -> &[usize] {
        self.inner.solution()
    }
}
