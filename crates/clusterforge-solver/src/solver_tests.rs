use super::*;
use crate::progress::{CountingProgressListener, NoProgress};
use crate::strategy::{ClusteringStrategy, SizeConstrained, Unconstrained};
use clusterforge_core::{ClusterSizeBounds, ClusterSizes, Fitness};
use clusterforge_test::projects::{chain, two_cliques};
use clusterforge_test::{FnOracle, TurboMqOracle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Default)]
struct TraceListener {
    restarts: Vec<(u64, usize)>,
    improvements: Vec<Fitness>,
}

impl ProgressListener for TraceListener {
    fn on_progress(&mut self, _evaluations: u64, _best_fitness: Fitness) {}

    fn on_restart(&mut self, restart: u64, cluster_count: usize) {
        self.restarts.push((restart, cluster_count));
    }

    fn on_new_best(&mut self, _restart: u64, _evaluations: u64, fitness: Fitness) {
        self.improvements.push(fitness);
    }
}

fn unconstrained_solver(
    class_count: usize,
    seed: u64,
    max_evaluations: u64,
) -> HillClimbingSolver<Unconstrained, ChaCha8Rng, NoProgress> {
    HillClimbingSolver::new(
        Unconstrained::new(class_count),
        ChaCha8Rng::seed_from_u64(seed),
        max_evaluations,
        NoProgress,
    )
}

#[test]
fn test_small_project_beats_first_random_solution() {
    let graph = chain(4);
    let first = Unconstrained::new(4).generate_solution(&mut ChaCha8Rng::seed_from_u64(7));
    let first_fitness = graph.modularization_quality(first.assignment.as_slice());

    let mut oracle = TurboMqOracle::new(graph);
    let result = unconstrained_solver(4, 7, 50).solve(&mut oracle).unwrap();

    assert_eq!(result.best_solution.len(), 4);
    assert!(result.best_solution.iter().all(|&c| c < 4));
    assert!(result.fitness >= first_fitness);
}

#[test]
fn test_same_seed_same_result() {
    let run = |seed| {
        let mut oracle = TurboMqOracle::new(two_cliques(3));
        unconstrained_solver(6, seed, 2_000).solve(&mut oracle).unwrap()
    };

    let a = run(42);
    let b = run(42);

    assert_eq!(a.best_solution, b.best_solution);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.restart_count, b.restart_count);
    assert_eq!(a.restart_best_found, b.restart_best_found);
    assert_eq!(a.evaluations, b.evaluations);
}

#[test]
fn test_budget_is_spent_exactly_once_over() {
    let mut oracle = TurboMqOracle::new(two_cliques(3));
    let result = unconstrained_solver(6, 3, 777).solve(&mut oracle).unwrap();

    // the run stops on the first evaluation past the budget
    assert_eq!(result.evaluations, 778);
    assert_eq!(oracle.evaluations(), 778);
}

#[test]
fn test_zero_budget_returns_first_solution() {
    let first = Unconstrained::new(5).generate_solution(&mut ChaCha8Rng::seed_from_u64(11));
    let mut oracle = TurboMqOracle::new(chain(5));

    let result = unconstrained_solver(5, 11, 0).solve(&mut oracle).unwrap();

    assert_eq!(result.best_solution, first.assignment);
    // the initial evaluation plus the first visit's re-evaluation
    assert_eq!(result.evaluations, 2);
    assert_eq!(result.restart_count, 0);
    assert_eq!(result.restart_best_found, 0);
}

#[test]
fn test_finds_clique_split() {
    let graph = two_cliques(3);
    let optimum = graph.modularization_quality(&[0, 0, 0, 1, 1, 1]);
    let mut oracle = TurboMqOracle::new(graph);

    let result = unconstrained_solver(6, 5, 5_000).solve(&mut oracle).unwrap();

    assert!(result.restart_count > 0);
    assert!(result.restart_best_found <= result.restart_count);
    assert!((result.fitness - optimum).abs() < 1e-12);
}

#[test]
fn test_reapplying_result_reproduces_fitness() {
    let graph = two_cliques(4);
    let mut oracle = TurboMqOracle::new(graph.clone());
    let result = unconstrained_solver(8, 9, 3_000).solve(&mut oracle).unwrap();

    let mut fresh = TurboMqOracle::new(graph);
    fresh.apply(&result.best_solution);

    assert_eq!(fresh.calculate_fitness(), result.fitness);
}

#[test]
fn test_best_fitness_never_decreases() {
    let mut oracle = TurboMqOracle::new(two_cliques(4));
    let mut solver = HillClimbingSolver::new(
        Unconstrained::new(8),
        ChaCha8Rng::seed_from_u64(21),
        4_000,
        TraceListener::default(),
    );

    let result = solver.solve(&mut oracle).unwrap();
    let improvements = &solver.listener().improvements;

    assert!(!improvements.is_empty());
    assert!(improvements.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(improvements.last().copied(), Some(result.fitness));
}

#[test]
fn test_restarts_are_announced() {
    let mut oracle = TurboMqOracle::new(two_cliques(3));
    let mut solver = HillClimbingSolver::new(
        Unconstrained::new(6),
        ChaCha8Rng::seed_from_u64(8),
        3_000,
        CountingProgressListener::new(),
    );

    let result = solver.solve(&mut oracle).unwrap();

    assert_eq!(solver.listener().restart_count(), result.restart_count);
    assert!(solver.listener().new_best_count() >= 1);
}

#[test]
fn test_constrained_restarts_use_only_feasible_cluster_count() {
    let bounds = ClusterSizeBounds::new(2, 3).unwrap();
    let strategy = SizeConstrained::new(5, bounds).unwrap();
    let mut oracle = TurboMqOracle::new(chain(5));
    let mut solver = HillClimbingSolver::new(
        strategy,
        ChaCha8Rng::seed_from_u64(13),
        2_000,
        TraceListener::default(),
    );

    let result = solver.solve(&mut oracle).unwrap();

    assert!(!solver.listener().restarts.is_empty());
    assert!(solver.listener().restarts.iter().all(|&(_, k)| k == 2));
    assert_eq!(result.cluster_count, 2);

    let sizes = ClusterSizes::tally(result.best_solution.as_slice(), 2);
    assert_eq!(sizes.cluster_count(), 2);
    assert!(bounds.admits(&sizes));
}

#[test]
fn test_constrained_best_respects_bounds() {
    let bounds = ClusterSizeBounds::new(2, 4).unwrap();
    let strategy = ClusteringStrategy::size_constrained(8, bounds).unwrap();
    let mut oracle = TurboMqOracle::new(two_cliques(4));
    let mut solver = HillClimbingSolver::new(
        strategy,
        ChaCha8Rng::seed_from_u64(17),
        5_000,
        NoProgress,
    );

    let result = solver.solve(&mut oracle).unwrap();
    let sizes = ClusterSizes::tally(result.best_solution.as_slice(), result.cluster_count);

    assert!((2..=4).contains(&result.cluster_count));
    assert!(bounds.admits(&sizes));
}

#[test]
fn test_class_count_mismatch_spends_nothing() {
    let mut oracle = TurboMqOracle::new(chain(5));
    let err = unconstrained_solver(4, 1, 100)
        .solve(&mut oracle)
        .unwrap_err();

    assert_eq!(
        err,
        ClusterForgeError::ClassCountMismatch {
            expected: 4,
            actual: 5,
        }
    );
    assert_eq!(oracle.evaluations(), 0);
}

#[test]
fn test_solver_is_reusable() {
    let mut solver = unconstrained_solver(3, 2, 200);
    let mut oracle = FnOracle::new(3, |s: &[usize]| s.iter().filter(|&&c| c == 0).count() as Fitness);

    let first = solver.solve(&mut oracle).unwrap();
    let second = solver.solve(&mut oracle).unwrap();

    assert_eq!(first.fitness, 3.0);
    assert_eq!(second.fitness, 3.0);
    assert_eq!(second.evaluations, 201);
}

#[test]
fn test_flat_landscape_keeps_initial_solution() {
    let first = Unconstrained::new(4).generate_solution(&mut ChaCha8Rng::seed_from_u64(6));
    let mut oracle = FnOracle::new(4, |_: &[usize]| 0.5);

    let result = unconstrained_solver(4, 6, 300).solve(&mut oracle).unwrap();

    assert!(result.restart_count > 0);
    assert_eq!(result.best_solution, first.assignment);
    assert_eq!(result.fitness, 0.5);
    assert_eq!(result.restart_best_found, 0);
    assert_eq!(result.cluster_count, 4);
}

#[test]
fn test_constrained_search_moves_out_of_singletons() {
    // clusters of 1..=4 classes over 4 classes, rewarding one shared cluster
    let bounds = ClusterSizeBounds::new(1, 4).unwrap();
    let strategy = SizeConstrained::new(4, bounds).unwrap();
    let mut oracle = FnOracle::new(4, |s: &[usize]| {
        s.iter().filter(|&&c| c == s[0]).count() as Fitness
    });
    let mut solver = HillClimbingSolver::new(
        strategy,
        ChaCha8Rng::seed_from_u64(12),
        500,
        NoProgress,
    );

    let result = solver.solve(&mut oracle).unwrap();

    assert_eq!(result.fitness, 4.0);
    assert_eq!(result.used_cluster_count(), 1);
}
