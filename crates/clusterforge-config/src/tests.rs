//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_evaluations = 50000
        random_seed = 42
        progress_interval = 500

        [cluster_size]
        min = 2
        max = 3
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_evaluations, 50_000);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.progress_interval, 500);
    assert_eq!(config.cluster_size, Some(ClusterSizeConfig { min: 2, max: 3 }));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_evaluations: 1000
        random_seed: 42
        cluster_size:
          min: 1
          max: 4
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_evaluations, 1000);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    assert!(config.is_size_constrained());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.max_evaluations, DEFAULT_MAX_EVALUATIONS);
    assert!(!config.is_size_constrained());
}

#[test]
fn test_unknown_type_is_parse_error() {
    let err = SearchConfig::from_toml_str("max_evaluations = \"lots\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SearchConfig::load("/nonexistent/clusterforge/search.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_random_seed(123)
        .with_max_evaluations(60)
        .with_cluster_size(1, 5)
        .with_progress_interval(0);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.max_evaluations, 60);
    assert_eq!(config.progress_interval, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_inverted_bounds() {
    let config = SearchConfig::new().with_cluster_size(4, 2);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_max() {
    let config = SearchConfig::new().with_cluster_size(0, 0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_cluster_size_bounds_for_project() {
    let size = ClusterSizeConfig { min: 2, max: 3 };
    let bounds = size.bounds_for(5).unwrap();
    assert_eq!(bounds.cluster_count_range(5), Some(2..=2));

    assert!(size.bounds_for(1).is_err());
}
