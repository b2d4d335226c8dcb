//! Search strategies.
//!
//! A strategy supplies the two behaviors that differ between unconstrained
//! and size-constrained clustering: how a restart's starting solution is
//! generated and which neighbors are feasible. The neighborhood explorer and
//! the local search driver are shared by every strategy.

use std::fmt::Debug;

use clusterforge_core::{ClusterSizeBounds, ClusterSizes, RandomSource, Result};

use crate::generator::{Candidate, ConstrainedGenerator, RandomGenerator};

/// Capability injected into the hill climbing search.
pub trait SearchStrategy: Debug {
    /// Number of classes the generated solutions cover.
    fn class_count(&self) -> usize;

    /// Generates the starting solution of a restart.
    fn generate_solution<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate;

    /// Returns true if a solution with these cluster sizes may be visited.
    fn is_feasible(&self, sizes: &ClusterSizes) -> bool;

    /// Short name used in log events.
    fn strategy_name(&self) -> &'static str;
}

/// Plain clustering: any class may go to any of `class_count` clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unconstrained {
    generator: RandomGenerator,
}

impl Unconstrained {
    pub fn new(class_count: usize) -> Self {
        Self {
            generator: RandomGenerator::new(class_count),
        }
    }
}

impl SearchStrategy for Unconstrained {
    fn class_count(&self) -> usize {
        self.generator.class_count()
    }

    fn generate_solution<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        self.generator.generate(rng)
    }

    fn is_feasible(&self, _sizes: &ClusterSizes) -> bool {
        true
    }

    fn strategy_name(&self) -> &'static str {
        "unconstrained"
    }
}

/// Clustering with every cluster holding between `min` and `max` classes.
///
/// # Example
///
/// ```
/// use clusterforge_core::ClusterSizeBounds;
/// use clusterforge_solver::strategy::SizeConstrained;
///
/// let bounds = ClusterSizeBounds::new(2, 3).unwrap();
/// assert!(SizeConstrained::new(5, bounds).is_ok());
/// assert!(SizeConstrained::new(1, bounds).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeConstrained {
    generator: ConstrainedGenerator,
}

impl SizeConstrained {
    /// Creates the strategy, failing before any evaluation if no cluster
    /// count can hold `class_count` classes within `bounds`.
    pub fn new(class_count: usize, bounds: ClusterSizeBounds) -> Result<Self> {
        Ok(Self {
            generator: ConstrainedGenerator::new(class_count, bounds)?,
        })
    }

    pub fn bounds(&self) -> &ClusterSizeBounds {
        self.generator.bounds()
    }

    pub fn generator(&self) -> &ConstrainedGenerator {
        &self.generator
    }
}

impl SearchStrategy for SizeConstrained {
    fn class_count(&self) -> usize {
        self.generator.class_count()
    }

    fn generate_solution<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        self.generator.generate(rng)
    }

    fn is_feasible(&self, sizes: &ClusterSizes) -> bool {
        self.generator.bounds().admits(sizes)
    }

    fn strategy_name(&self) -> &'static str {
        "size_constrained"
    }
}

/// Strategy selected at runtime, typically from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusteringStrategy {
    Unconstrained(Unconstrained),
    SizeConstrained(SizeConstrained),
}

impl ClusteringStrategy {
    pub fn unconstrained(class_count: usize) -> Self {
        Self::Unconstrained(Unconstrained::new(class_count))
    }

    pub fn size_constrained(class_count: usize, bounds: ClusterSizeBounds) -> Result<Self> {
        Ok(Self::SizeConstrained(SizeConstrained::new(class_count, bounds)?))
    }
}

impl SearchStrategy for ClusteringStrategy {
    fn class_count(&self) -> usize {
        match self {
            Self::Unconstrained(s) => s.class_count(),
            Self::SizeConstrained(s) => s.class_count(),
        }
    }

    fn generate_solution<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        match self {
            Self::Unconstrained(s) => s.generate_solution(rng),
            Self::SizeConstrained(s) => s.generate_solution(rng),
        }
    }

    fn is_feasible(&self, sizes: &ClusterSizes) -> bool {
        match self {
            Self::Unconstrained(s) => s.is_feasible(sizes),
            Self::SizeConstrained(s) => s.is_feasible(sizes),
        }
    }

    fn strategy_name(&self) -> &'static str {
        match self {
            Self::Unconstrained(s) => s.strategy_name(),
            Self::SizeConstrained(s) => s.strategy_name(),
        }
    }
}
