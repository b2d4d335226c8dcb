//! Progress reporting for hill climbing runs.
//!
//! Listeners are purely observational: they are called synchronously from
//! the search loop and cannot influence it.
//!
//! # Usage
//!
//! ```
//! use clusterforge_core::Fitness;
//! use clusterforge_solver::progress::ProgressListener;
//!
//! #[derive(Debug, Default)]
//! struct PrintingListener;
//!
//! impl ProgressListener for PrintingListener {
//!     fn on_progress(&mut self, evaluations: u64, best_fitness: Fitness) {
//!         println!("{evaluations}; {best_fitness}");
//!     }
//! }
//! ```

use std::fmt::Debug;

use clusterforge_core::Fitness;
use tracing::info;

/// Listener for search progress.
pub trait ProgressListener: Debug {
    /// Called every `progress_interval` evaluations with the best fitness
    /// recorded so far.
    fn on_progress(&mut self, evaluations: u64, best_fitness: Fitness);

    /// Called when a restart begins from a freshly generated solution.
    fn on_restart(&mut self, _restart: u64, _cluster_count: usize) {}

    /// Called when the global best solution improves.
    fn on_new_best(&mut self, _restart: u64, _evaluations: u64, _fitness: Fitness) {}
}

/// A listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressListener for NoProgress {
    fn on_progress(&mut self, _evaluations: u64, _best_fitness: Fitness) {}
}

impl<P: ProgressListener + ?Sized> ProgressListener for &mut P {
    fn on_progress(&mut self, evaluations: u64, best_fitness: Fitness) {
        (**self).on_progress(evaluations, best_fitness);
    }

    fn on_restart(&mut self, restart: u64, cluster_count: usize) {
        (**self).on_restart(restart, cluster_count);
    }

    fn on_new_best(&mut self, restart: u64, evaluations: u64, fitness: Fitness) {
        (**self).on_new_best(restart, evaluations, fitness);
    }
}

/// A listener that emits progress as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProgressListener;

impl LoggingProgressListener {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressListener for LoggingProgressListener {
    fn on_progress(&mut self, evaluations: u64, best_fitness: Fitness) {
        info!(
            event = "progress",
            evaluations = evaluations,
            best_fitness = best_fitness,
        );
    }
}

/// Keeps every `(evaluations, best_fitness)` report in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgressListener {
    reports: Vec<(u64, Fitness)>,
}

impl RecordingProgressListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(u64, Fitness)] {
        &self.reports
    }
}

impl ProgressListener for RecordingProgressListener {
    fn on_progress(&mut self, evaluations: u64, best_fitness: Fitness) {
        self.reports.push((evaluations, best_fitness));
    }
}

/// A counting listener that tracks notification occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Clone, Default)]
pub struct CountingProgressListener {
    progress_count: u64,
    restart_count: u64,
    new_best_count: u64,
}

impl CountingProgressListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of progress reports.
    pub fn progress_count(&self) -> u64 {
        self.progress_count
    }

    /// Returns the number of restarts announced.
    pub fn restart_count(&self) -> u64 {
        self.restart_count
    }

    /// Returns the number of best solution improvements.
    pub fn new_best_count(&self) -> u64 {
        self.new_best_count
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_progress(&mut self, _evaluations: u64, _best_fitness: Fitness) {
        self.progress_count += 1;
    }

    fn on_restart(&mut self, _restart: u64, _cluster_count: usize) {
        self.restart_count += 1;
    }

    fn on_new_best(&mut self, _restart: u64, _evaluations: u64, _fitness: Fitness) {
        self.new_best_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_listener() {
        let mut listener = CountingProgressListener::new();
        listener.on_progress(10, 1.0);
        listener.on_progress(20, 1.5);
        listener.on_restart(1, 3);
        listener.on_new_best(1, 25, 2.0);

        assert_eq!(listener.progress_count(), 2);
        assert_eq!(listener.restart_count(), 1);
        assert_eq!(listener.new_best_count(), 1);
    }

    #[test]
    fn test_recording_listener_through_reference() {
        let mut listener = RecordingProgressListener::new();
        {
            let mut borrowed = &mut listener;
            ProgressListener::on_progress(&mut borrowed, 100, 0.5);
        }
        assert_eq!(listener.reports(), &[(100, 0.5)]);
    }

    #[test]
    fn test_no_progress_accepts_everything() {
        let mut listener = NoProgress;
        listener.on_progress(1, 0.0);
        listener.on_restart(1, 1);
        listener.on_new_best(0, 1, 0.0);
    }
}
