//! Error types for pipeline evaluation and configuration loading.
//!
//! Pipeline errors surface synchronously at the terminal call site. Evaluation
//! is fail-fast and non-transactional: when a caller-supplied function fails,
//! the terminal call returns the error and any side effects already performed
//! by `peek` or `for_each` stay in place.
//!
//! # Example
//!
//! ```rust
//! use seqflow::errors::PipelineError;
//! use seqflow::Pipeline;
//!
//! let result = Pipeline::from_source(vec!["1", "2", "x"])
//!     .try_map(|s| s.parse::<i32>())
//!     .collect_to_list();
//!
//! let err = result.unwrap_err();
//! assert!(err.is_transform());
//! assert_eq!(err.stage(), Some("map"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error produced by a caller-supplied function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while evaluating a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A reduction without an identity value received no elements.
    #[error("cannot reduce an empty sequence without an identity value")]
    EmptySequence,

    /// A caller-supplied function failed during evaluation.
    #[error("{stage} failed: {source}")]
    Transform {
        /// Name of the stage or terminal whose function failed
        stage: &'static str,
        #[source]
        source: BoxError,
    },

    /// A comparator broke the total-order contract during a sort.
    #[error("comparator violates total order: {0}")]
    Comparison(String),

    /// Evaluation observed a cancelled token.
    #[error("evaluation cancelled after {processed} elements")]
    Cancelled { processed: usize },
}

impl PipelineError {
    /// Wrap a caller failure raised inside `stage`.
    pub fn transform(stage: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transform {
            stage,
            source: source.into(),
        }
    }

    /// Create a comparison error with a description of the violation.
    pub fn comparison(detail: impl Into<String>) -> Self {
        Self::Comparison(detail.into())
    }

    pub fn is_transform(&self) -> bool {
        matches!(self, Self::Transform { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Stage name for transform failures.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Transform { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

/// Result type alias for pipeline evaluation.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
