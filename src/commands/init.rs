use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Seqflow Configuration

[pipeline]
# Check the comparator contract on every sorted output
verify_ordering = true
# Emit a TRACE event for each element pulled from a source
trace_elements = false

[output]
color = true
"#;

pub fn init_config(force: bool) -> Result<PathBuf> {
    init_config_in(Path::new("."), force)
}

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("writing {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "wrote default configuration");

    Ok(config_path)
}
