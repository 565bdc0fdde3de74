//! Compiler options.
//!
//! Options can be loaded from:
//! 1. A YAML file
//! 2. Environment variables (with `DNALANG_` prefix)
//!
//! Environment variables take precedence over the file, which takes
//! precedence over the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Number of tokens included in a successful compilation's preview, and the
/// largest limit the options accept.
pub const DEFAULT_TOKEN_PREVIEW_LIMIT: usize = 50;

/// Options controlling what a compilation reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    /// Maximum number of tokens echoed back in the result, at most
    /// [`DEFAULT_TOKEN_PREVIEW_LIMIT`].
    pub token_preview_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            token_preview_limit: DEFAULT_TOKEN_PREVIEW_LIMIT,
        }
    }
}

impl CompileOptions {
    /// Parse options from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml_str(&contents)
    }

    /// Load options from an optional file, then apply environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let options = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        options.merge_env()
    }

    /// Apply `DNALANG_*` environment variables that are set.
    fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(v) = std::env::var("DNALANG_TOKEN_PREVIEW_LIMIT") {
            self.token_preview_limit = v.parse().map_err(|_| {
                ConfigError::ParseError(format!("DNALANG_TOKEN_PREVIEW_LIMIT: invalid value '{v}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate option values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_preview_limit > DEFAULT_TOKEN_PREVIEW_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "token_preview_limit must be at most {DEFAULT_TOKEN_PREVIEW_LIMIT}, got {}",
                self.token_preview_limit
            )));
        }
        Ok(())
    }

    /// The preview limit actually applied, capped for options built in code.
    pub fn preview_limit(&self) -> usize {
        self.token_preview_limit.min(DEFAULT_TOKEN_PREVIEW_LIMIT)
    }
}

/// Errors loading compiler options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
