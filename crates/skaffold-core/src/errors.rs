//! Cross-cutting error types for Skaffold.
//!
//! Domain-specific errors (`ConfigError`, `SurveyError`) live in their own
//! crates. The binary converges everything into `anyhow::Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading project-level data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The project config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML document did not match the expected config shape.
    #[error("failed to parse skaffold config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
