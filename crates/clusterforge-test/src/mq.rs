//! Modularization quality oracle.
//!
//! Scores a clustering with the TurboMQ metric: each non-empty cluster
//! contributes `2 * intra / (2 * intra + inter)`, where `intra` is the weight
//! of dependencies inside the cluster and `inter` the weight of dependencies
//! crossing its border in either direction.

use clusterforge_core::{Fitness, FitnessOracle};

/// Directed, weighted dependencies between classes.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    class_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl DependencyGraph {
    pub fn new(class_count: usize) -> Self {
        Self {
            class_count,
            edges: Vec::new(),
        }
    }

    /// Adds a dependency of weight 1 from `from` to `to`.
    pub fn depend(self, from: usize, to: usize) -> Self {
        self.depend_weighted(from, to, 1.0)
    }

    pub fn depend_weighted(mut self, from: usize, to: usize, weight: f64) -> Self {
        assert!(from < self.class_count && to < self.class_count);
        self.edges.push((from, to, weight));
        self
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    /// Computes TurboMQ for `solution` without building an oracle.
    pub fn modularization_quality(&self, solution: &[usize]) -> Fitness {
        let clusters = solution.iter().copied().max().map_or(0, |m| m + 1);
        let mut intra = vec![0.0; clusters];
        let mut inter = vec![0.0; clusters];

        for &(from, to, weight) in &self.edges {
            let (a, b) = (solution[from], solution[to]);
            if a == b {
                intra[a] += weight;
            } else {
                inter[a] += weight;
                inter[b] += weight;
            }
        }

        intra
            .iter()
            .zip(&inter)
            .filter(|&(&i, _)| i > 0.0)
            .map(|(&i, &e)| 2.0 * i / (2.0 * i + e))
            .sum()
    }
}

/// Fitness oracle computing TurboMQ of its current clustering.
///
/// Every class starts in its own cluster.
#[derive(Debug, Clone)]
pub struct TurboMqOracle {
    graph: DependencyGraph,
    solution: Vec<usize>,
    evaluations: u64,
}

impl TurboMqOracle {
    pub fn new(graph: DependencyGraph) -> Self {
        let solution = (0..graph.class_count()).collect();
        Self {
            graph,
            solution,
            evaluations: 0,
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Number of `calculate_fitness` calls served so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

impl FitnessOracle for TurboMqOracle {
    fn move_class(&mut self, class: usize, cluster: usize) {
        self.solution[class] = cluster;
    }

    fn calculate_fitness(&mut self) -> Fitness {
        self.evaluations += 1;
        self.graph.modularization_quality(&self.solution)
    }

    fn solution(&self) -> &[usize] {
        &self.solution
    }
}
