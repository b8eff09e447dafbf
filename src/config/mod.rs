//! Configuration loading and types for latexpage.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

pub use types::{Config, OutputConfig};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "latexpage.yaml";

/// Prefix for environment overrides, e.g. `LATEXPAGE__OUTPUT__MARKER`.
pub const ENV_PREFIX: &str = "LATEXPAGE";

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}

impl Config {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = &self.output.extension;
        if extension.is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'output.extension' must not be empty".to_string(),
            ));
        }
        if extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "invalid config: 'output.extension' is written without a leading dot (try '{}')",
                extension.trim_start_matches('.')
            )));
        }
        if self.output.marker.contains(['\n', '\r']) {
            return Err(ConfigError::Validation(
                "invalid config: 'output.marker' must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}
