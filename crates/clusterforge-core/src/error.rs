//! Error types for ClusterForge

use thiserror::Error;

/// Main error type for ClusterForge operations.
///
/// Every variant is raised before the first fitness evaluation. A running
/// search never fails: running out of evaluations is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterForgeError {
    /// The minimum cluster size is larger than the maximum.
    #[error("minimum cluster size ({min}) cannot be bigger than maximum cluster size ({max})")]
    InvertedClusterBounds { min: usize, max: usize },

    /// No cluster count can hold `class_count` classes within the bounds.
    #[error(
        "impossible to create clusters of {min}..={max} classes for a project with {class_count} classes"
    )]
    InfeasibleClusterBounds {
        class_count: usize,
        min: usize,
        max: usize,
    },

    /// A maximum cluster size of zero admits no class at all.
    #[error("maximum cluster size must be at least 1")]
    ZeroMaxClusterSize,

    /// The fitness oracle tracks a different number of classes than the search.
    #[error("fitness oracle tracks {actual} classes, search was configured for {expected}")]
    ClassCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for ClusterForge operations
pub type Result<T> = std::result::Result<T, ClusterForgeError>;
