//! Cluster size tallies and min/max size bounds.

use std::ops::RangeInclusive;

use crate::error::{ClusterForgeError, Result};

/// Number of classes held by each cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSizes {
    counts: Vec<usize>,
}

impl ClusterSizes {
    /// Counts the members of clusters `0..cluster_count` in `solution`.
    ///
    /// Clusters referenced by `solution` beyond `cluster_count` are counted
    /// too, growing the tally as needed.
    pub fn tally(solution: &[usize], cluster_count: usize) -> Self {
        let mut counts = vec![0; cluster_count];
        for &cluster in solution {
            if cluster >= counts.len() {
                counts.resize(cluster + 1, 0);
            }
            counts[cluster] += 1;
        }
        Self { counts }
    }

    /// Returns the size of `cluster`, zero if the cluster is not tracked.
    pub fn get(&self, cluster: usize) -> usize {
        self.counts.get(cluster).copied().unwrap_or(0)
    }

    /// Returns the number of tracked clusters.
    pub fn cluster_count(&self) -> usize {
        self.counts.len()
    }

    /// Records one class leaving `from` for `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or either cluster is not tracked.
    pub fn relocate(&mut self, from: usize, to: usize) {
        self.counts[from] -= 1;
        self.counts[to] += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().copied()
    }
}

/// Inclusive bounds on the number of classes per cluster.
///
/// # Example
///
/// ```
/// use clusterforge_core::ClusterSizeBounds;
///
/// let bounds = ClusterSizeBounds::for_class_count(2, 3, 5).unwrap();
/// assert_eq!(bounds.cluster_count_range(5), Some(2..=2));
///
/// assert!(ClusterSizeBounds::new(4, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSizeBounds {
    min: usize,
    max: usize,
}

impl ClusterSizeBounds {
    /// Creates bounds, rejecting `min > max` and `max == 0`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(ClusterForgeError::InvertedClusterBounds { min, max });
        }
        if max == 0 {
            return Err(ClusterForgeError::ZeroMaxClusterSize);
        }
        Ok(Self { min, max })
    }

    /// Creates bounds and checks that at least one cluster count can hold
    /// `class_count` classes. Bounds larger than the project are rejected.
    pub fn for_class_count(min: usize, max: usize, class_count: usize) -> Result<Self> {
        let bounds = Self::new(min, max)?;
        if bounds.cluster_count_range(class_count).is_none() {
            return Err(ClusterForgeError::InfeasibleClusterBounds {
                class_count,
                min,
                max,
            });
        }
        Ok(bounds)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns the cluster counts `k` with `k * min <= class_count <= k * max`.
    ///
    /// The upper end is the largest `k` (at most `class_count`) whose minimum
    /// fill fits, the lower end the smallest `k >= 1` whose maximum fill
    /// covers every class. `None` when the two ends cross, or when either
    /// bound exceeds `class_count`.
    pub fn cluster_count_range(&self, class_count: usize) -> Option<RangeInclusive<usize>> {
        if self.max > class_count {
            return None;
        }
        let largest = if self.min == 0 {
            class_count
        } else {
            class_count / self.min
        };
        let smallest = class_count.div_ceil(self.max).max(1);

        (smallest <= largest).then_some(smallest..=largest)
    }

    /// Returns true if `size` lies within the bounds.
    pub fn admits_size(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }

    /// Returns true if every non-empty cluster lies within the bounds.
    ///
    /// An emptied cluster no longer exists, so it never violates `min`.
    pub fn admits(&self, sizes: &ClusterSizes) -> bool {
        sizes
            .iter()
            .filter(|&size| size > 0)
            .all(|size| self.admits_size(size))
    }
}
