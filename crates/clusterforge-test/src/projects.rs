//! Hand-built dependency graphs.

use crate::mq::DependencyGraph;

/// Two fully connected groups of `size` classes joined by a single edge.
///
/// Classes `0..size` form the first group, `size..2*size` the second. The
/// best clustering splits the groups apart.
pub fn two_cliques(size: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new(2 * size);
    for offset in [0, size] {
        for a in 0..size {
            for b in 0..size {
                if a != b {
                    graph = graph.depend(offset + a, offset + b);
                }
            }
        }
    }
    if size > 0 {
        graph = graph.depend(size - 1, size);
    }
    graph
}

/// `n` classes where class `i` depends on class `i + 1`.
pub fn chain(n: usize) -> DependencyGraph {
    (1..n).fold(DependencyGraph::new(n), |graph, i| graph.depend(i - 1, i))
}
