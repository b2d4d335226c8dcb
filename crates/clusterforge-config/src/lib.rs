//! Configuration system for ClusterForge.
//!
//! Load search configuration from TOML or YAML files to control the
//! evaluation budget, seeding and cluster size constraints without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use clusterforge_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     max_evaluations = 200000
//!     random_seed = 7
//!
//!     [cluster_size]
//!     min = 2
//!     max = 6
//! "#).unwrap();
//!
//! assert_eq!(config.max_evaluations, 200_000);
//! assert!(config.is_size_constrained());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use clusterforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use clusterforge_core::ClusterSizeBounds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default evaluation budget.
pub const DEFAULT_MAX_EVALUATIONS: u64 = 100_000;

/// Default number of evaluations between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Budget of fitness evaluations shared by every restart.
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: u64,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Evaluations between two progress reports. Zero disables them.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,

    /// Cluster size constraints. Absent means unconstrained clustering.
    #[serde(default)]
    pub cluster_size: Option<ClusterSizeConfig>,
}

fn default_max_evaluations() -> u64 {
    DEFAULT_MAX_EVALUATIONS
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            random_seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            cluster_size: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, max_evaluations: u64) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the cluster size bounds, selecting the constrained search.
    pub fn with_cluster_size(mut self, min: usize, max: usize) -> Self {
        self.cluster_size = Some(ClusterSizeConfig { min, max });
        self
    }

    /// Sets the number of evaluations between progress reports.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Returns true if cluster size bounds are configured.
    pub fn is_size_constrained(&self) -> bool {
        self.cluster_size.is_some()
    }

    /// Checks the parts of the configuration that do not depend on the
    /// project being clustered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = &self.cluster_size {
            if size.min > size.max {
                return Err(ConfigError::Invalid(format!(
                    "cluster_size.min ({}) cannot be bigger than cluster_size.max ({})",
                    size.min, size.max
                )));
            }
            if size.max == 0 {
                return Err(ConfigError::Invalid(
                    "cluster_size.max must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Inclusive bounds on the number of classes per cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClusterSizeConfig {
    /// Minimum number of classes per cluster.
    pub min: usize,

    /// Maximum number of classes per cluster.
    pub max: usize,
}

impl ClusterSizeConfig {
    /// Converts to bounds checked against a project of `class_count` classes.
    pub fn bounds_for(&self, class_count: usize) -> clusterforge_core::Result<ClusterSizeBounds> {
        ClusterSizeBounds::for_class_count(self.min, self.max, class_count)
    }
}

#[cfg(test)]
mod tests;
