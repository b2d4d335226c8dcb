//! Colorful console output for hill climbing runs.
//!
//! Provides a `tracing` layer that renders the solver's structured events
//! (`solve_start`, `restart`, `new_best`, `progress`, `solve_end`).

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "clusterforge_solver=info";

/// Initializes console output for the solver.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `clusterforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // another global subscriber may already be installed
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("clusterforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    class_count: Option<u64>,
    max_evaluations: Option<u64>,
    evaluations: Option<u64>,
    restart: Option<u64>,
    restarts: Option<u64>,
    restart_best_found: Option<u64>,
    cluster_count: Option<u64>,
    duration_ms: Option<u64>,
    fitness: Option<f64>,
    best_fitness: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "strategy" => self.strategy = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "class_count" => self.class_count = Some(value),
            "max_evaluations" => self.max_evaluations = Some(value),
            "evaluations" => self.evaluations = Some(value),
            "restart" => self.restart = Some(value),
            "restarts" => self.restarts = Some(value),
            "restart_best_found" => self.restart_best_found = Some(value),
            "cluster_count" => self.cluster_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "fitness" => self.fitness = Some(value),
            "best_fitness" => self.best_fitness = Some(value),
            _ => {}
        }
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "restart" => format_restart(v),
        "new_best" => format_new_best(v),
        "progress" => format_progress(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} search started: class count ({}), evaluation budget ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[HillClimbing]".bright_cyan(),
        v.strategy.as_deref().unwrap_or("unconstrained").white().bold(),
        count(v.class_count).bright_yellow(),
        count(v.max_evaluations).bright_yellow()
    )
}

fn format_restart(v: &EventVisitor) -> String {
    format!(
        "    {} Restart {:>5} | clusters ({}) at evaluation {}",
        "<>".bright_black(),
        count(v.restart).white(),
        count(v.cluster_count).yellow(),
        count(v.evaluations).white()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Evaluation {:>9} | restart {} | fitness {}",
        "->".bright_blue(),
        count(v.evaluations).white(),
        count(v.restart).white(),
        format_fitness(v.fitness)
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} {} evaluations ({}), best fitness ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[HillClimbing]".bright_cyan(),
        count(v.evaluations).white(),
        format_fitness(v.best_fitness)
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} search ended: time spent ({}), best fitness ({}), restarts ({}), best found at restart ({}), evaluations ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[HillClimbing]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_fitness(v.fitness),
        count(v.restarts).white(),
        count(v.restart_best_found).white(),
        count(v.evaluations).bright_magenta().bold()
    )
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_fitness(fitness: Option<f64>) -> String {
    match fitness {
        Some(f) => format!("{:.6}", f).bright_green().to_string(),
        None => "N/A".white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_renders_nothing() {
        let visitor = EventVisitor {
            event: Some("improving_move".to_string()),
            ..Default::default()
        };
        assert!(format_search_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_end_mentions_counts() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            evaluations: Some(100_001),
            restarts: Some(12),
            fitness: Some(1.5),
            duration_ms: Some(1_500),
            ..Default::default()
        };
        let output = format_search_event(&visitor);

        assert!(output.contains("100,001"));
        assert!(output.contains("1.50s"));
        assert!(output.contains("1.500000"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(90_000), "1m 30s");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
