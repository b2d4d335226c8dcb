//! Random solution generators.
//!
//! Each restart of a hill climbing run starts from a freshly generated
//! assignment. The unconstrained generator draws every cluster independently;
//! the constrained generator also picks how many clusters to use and keeps
//! every cluster within the configured size bounds.

use std::ops::RangeInclusive;

use clusterforge_core::{Assignment, ClusterForgeError, ClusterSizeBounds, RandomSource, Result};

/// A generated starting point for local search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub assignment: Assignment,
    /// Number of clusters the local search may use for this candidate.
    pub cluster_count: usize,
}

/// Draws every class's cluster uniformly from `0..cluster_count`.
///
/// # Panics
///
/// Panics if `cluster_count` is zero while `class_count` is not.
pub fn generate_random<R: RandomSource + ?Sized>(
    class_count: usize,
    cluster_count: usize,
    rng: &mut R,
) -> Assignment {
    if class_count == 0 {
        return Assignment::default();
    }
    Assignment::new(rng.uniform_int_vec(0, cluster_count - 1, class_count))
}

/// Generator placing every class in a uniformly random cluster, with one
/// cluster available per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGenerator {
    class_count: usize,
}

impl RandomGenerator {
    pub fn new(class_count: usize) -> Self {
        Self { class_count }
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        Candidate {
            assignment: generate_random(self.class_count, self.class_count, rng),
            cluster_count: self.class_count,
        }
    }
}

/// Generator respecting minimum and maximum cluster sizes.
///
/// Generation runs in three stages:
/// 1. pick a cluster count uniformly among the feasible ones,
/// 2. fill every cluster, in ascending order, up to the minimum size with
///    classes drawn without replacement,
/// 3. place each remaining class, in ascending order, into a uniformly chosen
///    cluster that is still below the maximum size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedGenerator {
    class_count: usize,
    bounds: ClusterSizeBounds,
    cluster_counts: RangeInclusive<usize>,
}

impl ConstrainedGenerator {
    /// Creates a generator, failing if no cluster count can hold
    /// `class_count` classes within `bounds`.
    pub fn new(class_count: usize, bounds: ClusterSizeBounds) -> Result<Self> {
        let Some(cluster_counts) = bounds.cluster_count_range(class_count) else {
            return Err(ClusterForgeError::InfeasibleClusterBounds {
                class_count,
                min: bounds.min(),
                max: bounds.max(),
            });
        };
        Ok(Self {
            class_count,
            bounds,
            cluster_counts,
        })
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn bounds(&self) -> &ClusterSizeBounds {
        &self.bounds
    }

    /// The cluster counts a generated candidate may use.
    pub fn cluster_counts(&self) -> &RangeInclusive<usize> {
        &self.cluster_counts
    }

    pub fn select_cluster_count<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        rng.uniform_int(*self.cluster_counts.start(), *self.cluster_counts.end())
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Candidate {
        let cluster_count = self.select_cluster_count(rng);
        let (min, max) = (self.bounds.min(), self.bounds.max());

        let mut clusters = vec![0; self.class_count];
        let mut sizes = vec![0usize; cluster_count];
        let mut unassigned: Vec<usize> = (0..self.class_count).collect();

        // cluster_count * min <= class_count, so classes never run out here
        for (cluster, size) in sizes.iter_mut().enumerate() {
            while *size < min {
                let position = rng.uniform_int(0, unassigned.len() - 1);
                let class = unassigned.remove(position);
                clusters[class] = cluster;
                *size += 1;
            }
        }

        // cluster_count * max >= class_count, so some cluster is always open
        let mut open = Vec::with_capacity(cluster_count);
        for class in unassigned {
            open.clear();
            open.extend((0..cluster_count).filter(|&c| sizes[c] < max));
            let cluster = open[rng.uniform_int(0, open.len() - 1)];
            clusters[class] = cluster;
            sizes[cluster] += 1;
        }

        Candidate {
            assignment: Assignment::new(clusters),
            cluster_count,
        }
    }
}
