//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Reading or writing the config file failed.
    #[error("failed to access config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has a malformed `[survey]` table.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `config set` was given a key that does not exist.
    #[error("unknown config key '{key}' - please enter one of {valid:?}")]
    UnknownKey { key: String, valid: Vec<&'static str> },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// No home directory to place the global config in.
    #[error("home directory not found - pass --config explicitly")]
    NoHomeDir,
}

