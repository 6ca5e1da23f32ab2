//! Configuration for pipeline evaluation and demo output.
//!
//! Configuration is read from `.seqflow.toml`, searched for in the current
//! directory and its ancestors. Every key is optional:
//!
//! ```toml
//! [pipeline]
//! verify_ordering = true
//! trace_elements = false
//!
//! [output]
//! color = true
//! ```

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for by [`load_config`].
pub const CONFIG_FILE_NAME: &str = ".seqflow.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeqflowConfig {
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

/// Settings that govern a single pipeline evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Check the comparator contract on adjacent pairs after each sort
    pub verify_ordering: bool,

    /// Emit a trace event for every element read from a source
    pub trace_elements: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            verify_ordering: true,
            trace_elements: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_verify_ordering(mut self, verify: bool) -> Self {
        self.verify_ordering = verify;
        self
    }

    pub fn with_trace_elements(mut self, trace: bool) -> Self {
        self.trace_elements = trace;
        self
    }
}

/// Settings for the demo report writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Colour section headings
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<SeqflowConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration from an explicit path.
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub fn load_config_from_path(path: &Path) -> Result<SeqflowConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Generate `start` and its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
///
/// Unreadable or malformed files are logged and skipped.
pub fn find_config_from(start: PathBuf) -> Option<SeqflowConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
        .find_map(|path| match load_config_from_path(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config file");
                None
            }
        })
}

/// Load configuration by searching upward from the current directory.
///
/// Falls back to defaults when nothing is found.
pub fn load_config() -> SeqflowConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            return SeqflowConfig::default();
        }
    };

    find_config_from(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        SeqflowConfig::default()
    })
}
