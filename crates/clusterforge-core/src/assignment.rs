//! Class-to-cluster assignment.

use std::fmt;
use std::ops::Index;

use crate::bounds::ClusterSizes;

/// Modularization quality reported by a fitness oracle. Higher is better.
pub type Fitness = f64;

/// A complete mapping from class index to cluster index.
///
/// Position `i` holds the cluster of class `i`. The length is fixed for the
/// lifetime of a search; only the cluster values change.
///
/// # Example
///
/// ```
/// use clusterforge_core::Assignment;
///
/// let mut assignment = Assignment::from(vec![0, 0, 1]);
/// assignment.set(2, 0);
///
/// assert_eq!(assignment.cluster_of(2), 0);
/// assert_eq!(assignment.to_string(), "[0 0 0]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Assignment {
    clusters: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment from per-class cluster indices.
    pub fn new(clusters: Vec<usize>) -> Self {
        Self { clusters }
    }

    /// Creates an assignment placing every class into cluster 0.
    pub fn single_cluster(class_count: usize) -> Self {
        Self {
            clusters: vec![0; class_count],
        }
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns true if the assignment covers no class.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Returns the cluster of `class`.
    ///
    /// # Panics
    ///
    /// Panics if `class` is out of range.
    pub fn cluster_of(&self, class: usize) -> usize {
        self.clusters[class]
    }

    /// Moves `class` into `cluster`.
    pub fn set(&mut self, class: usize, cluster: usize) {
        self.clusters[class] = cluster;
    }

    /// Overwrites this assignment with the content of `source`.
    pub fn copy_from(&mut self, source: &Assignment) {
        self.clusters.clone_from(&source.clusters);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.clusters.iter()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.clusters
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.clusters
    }

    /// Returns the highest cluster index in use, if any.
    pub fn max_cluster(&self) -> Option<usize> {
        self.clusters.iter().copied().max()
    }

    /// Counts the members of each of the first `cluster_count` clusters.
    pub fn cluster_sizes(&self, cluster_count: usize) -> ClusterSizes {
        ClusterSizes::tally(&self.clusters, cluster_count)
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(clusters: Vec<usize>) -> Self {
        Self::new(clusters)
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(assignment: Assignment) -> Self {
        assignment.clusters
    }
}

impl Index<usize> for Assignment {
    type Output = usize;

    fn index(&self, class: usize) -> &usize {
        &self.clusters[class]
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cluster) in self.clusters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cluster}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Assignment::from(vec![3, 0, 1]).to_string(), "[3 0 1]");
        assert_eq!(Assignment::from(vec![7]).to_string(), "[7]");
        assert_eq!(Assignment::default().to_string(), "[]");
    }

    #[test]
    fn test_set_and_index() {
        let mut assignment = Assignment::single_cluster(3);
        assignment.set(1, 4);

        assert_eq!(assignment[1], 4);
        assert_eq!(assignment.cluster_of(0), 0);
        assert_eq!(assignment.max_cluster(), Some(4));
        assert_eq!(assignment.len(), 3);
    }

    #[test]
    fn test_copy_from_keeps_target_independent() {
        let source = Assignment::from(vec![1, 2, 3]);
        let mut target = Assignment::single_cluster(3);

        target.copy_from(&source);
        target.set(0, 9);

        assert_eq!(source.as_slice(), &[1, 2, 3]);
        assert_eq!(target.as_slice(), &[9, 2, 3]);
    }

    #[test]
    fn test_cluster_sizes() {
        let assignment = Assignment::from(vec![0, 2, 2, 0, 2]);
        let sizes = assignment.cluster_sizes(4);

        assert_eq!(sizes.as_slice(), &[2, 0, 3, 0]);
    }

    #[test]
    fn test_empty() {
        let assignment = Assignment::default();
        assert!(assignment.is_empty());
        assert_eq!(assignment.max_cluster(), None);
    }
}
