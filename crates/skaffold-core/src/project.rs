//! Project configuration read from `skaffold.yaml`.
//!
//! Only the header of each document is modelled; pipeline sections are
//! ignored. A single file may hold several configs separated by `---`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::versioned::VersionedConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ProjectConfig {
    /// Parse every YAML document in `text`. Empty documents (an empty file,
    /// comments only, a trailing `---`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Yaml` if a document is malformed, or
    /// `CoreError::Validation` if a document has an empty `apiVersion`.
    pub fn parse_all(text: &str) -> Result<Vec<Self>, CoreError> {
        let mut configs = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            let value = serde_yaml::Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }
            let config: Self = serde_yaml::from_value(value)?;
            if config.api_version.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "config #{} has an empty apiVersion",
                    configs.len() + 1
                )));
            }
            configs.push(config);
        }
        Ok(configs)
    }

    /// Read and parse a `skaffold.yaml` file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Io` if the file cannot be read, otherwise the
    /// errors of [`ProjectConfig::parse_all`].
    pub fn load_all(path: &Path) -> Result<Vec<Self>, CoreError> {
        let text = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_all(&text)
    }
}

impl VersionedConfig for ProjectConfig {
    fn version(&self) -> &str {
        &self.api_version
    }
}
