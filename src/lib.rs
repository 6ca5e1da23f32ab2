//! Lazy, single-use sequence pipelines.
//!
//! ```rust
//! use seqflow::Pipeline;
//!
//! let squares_of_evens = Pipeline::from_source(1..=6)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .collect_to_list()
//!     .unwrap();
//! assert_eq!(squares_of_evens, vec![4, 16, 36]);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod demos;
pub mod errors;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use crate::config::{PipelineConfig, SeqflowConfig};
pub use crate::errors::{PipelineError, Result};
pub use crate::pipeline::{
    from, ordering, CancellationToken, Partition, Pipeline, PipelineExt, SourceBuilder, StageKind,
};
