//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use dnalang_compiler::CompileOptions;

/// Read a DNA-Lang source file.
pub fn load_source(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

/// Load compiler options from an optional YAML file plus environment overrides.
pub fn load_options(config: Option<&Path>) -> Result<CompileOptions> {
    let options = CompileOptions::load(config).with_context(|| match config {
        Some(path) => format!("Failed to load options from {}", path.display()),
        None => "Failed to load options from environment".to_string(),
    })?;
    debug!(?options, "loaded compiler options");
    Ok(options)
}
