//! Fitness oracle trait.

use crate::assignment::{Assignment, Fitness};

/// The oracle owns the per-class cluster state and computes the fitness
/// (modularization quality) of whatever state it currently holds.
///
/// The search mutates the oracle one class at a time through
/// [`move_class`](FitnessOracle::move_class) and reads the fitness back with
/// [`calculate_fitness`](FitnessOracle::calculate_fitness). Exactly one caller
/// writes to an oracle during a search; it is borrowed mutably for the whole
/// run, so no synchronization is involved.
///
/// # Contract
///
/// - A move is visible to the very next `calculate_fitness` call.
/// - [`solution`](FitnessOracle::solution) reflects the cumulative effect of
///   every `move_class` call so far.
/// - Two oracles holding the same state report the same fitness.
pub trait FitnessOracle {
    /// Places `class` into `cluster`.
    fn move_class(&mut self, class: usize, cluster: usize);

    /// Computes the fitness of the current state. Higher is better.
    fn calculate_fitness(&mut self) -> Fitness;

    /// Returns the cluster currently held for every class.
    fn solution(&self) -> &[usize];

    /// Returns the number of classes tracked by this oracle.
    fn class_count(&self) -> usize {
        self.solution().len()
    }

    /// Mirrors `assignment` into the oracle, moving only the classes whose
    /// cluster differs from the one currently held.
    fn apply(&mut self, assignment: &Assignment) {
        for (class, &cluster) in assignment.iter().enumerate() {
            if self.solution()[class] != cluster {
                self.move_class(class, cluster);
            }
        }
    }
}

impl<O: FitnessOracle + ?Sized> FitnessOracle for &mut O {
    fn move_class(&mut self, class: usize, cluster: usize) {
        (**self).move_class(class, cluster);
    }

    fn calculate_fitness(&mut self) -> Fitness {
        (**self).calculate_fitness()
    }

    fn solution(&self) -> &[usize] {
        (**self).solution()
    }

    fn class_count(&self) -> usize {
        (**self).class_count()
    }

    fn apply(&mut self, assignment: &Assignment) {
        (**self).apply(assignment);
    }
}
