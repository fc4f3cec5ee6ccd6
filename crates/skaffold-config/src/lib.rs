//! # skaffold-config
//!
//! Layered global configuration for Skaffold using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKAFFOLD_*` prefix, `__` as separator)
//! 2. The global config file (`~/.skaffold/config.toml` unless overridden)
//! 3. Built-in defaults
//!
//! Figment maps `SKAFFOLD_SURVEY__DISABLE_PROMPT` -> `survey.disable_prompt`.
//!
//! Writes edit the file's `[survey]` table in place, so environment
//! overrides are never persisted and tables owned by other tools survive.
//!
//! # Usage
//!
//! ```no_run
//! use skaffold_config::GlobalConfig;
//!
//! let path = skaffold_config::default_config_path().expect("home dir");
//! let config = GlobalConfig::load(&path).expect("config");
//! if config.survey.should_display_prompt(chrono::Utc::now()) {
//!     println!("time to ask");
//! }
//! ```

mod error;
mod survey;

pub use error::ConfigError;
pub use survey::{PROMPTED_QUIET_DAYS, SurveyConfig, TAKEN_QUIET_DAYS, UserSurvey};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use skaffold_core::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE};

/// Keys accepted by `skaffold config set --survey`.
pub const SURVEY_KEYS: [&str; 1] = ["disable-prompt"];

const SURVEY_TABLE: &str = "survey";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl GlobalConfig {
    /// Load the effective configuration: defaults, then `path`, then env.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::figment(path)
            .merge(Env::prefixed("SKAFFOLD_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load only what is stored in `path` (plus defaults).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if the file cannot be parsed.
    pub fn read_file(path: &Path) -> Result<Self, ConfigError> {
        Self::figment(path).extract().map_err(ConfigError::from)
    }

    fn figment(path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }
        figment
    }
}

/// `~/.skaffold/config.toml`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
        .ok_or(ConfigError::NoHomeDir)
}

/// Record that survey `id` was prompted, stored in `path`.
///
/// # Errors
///
/// Returns any read or write error of the config file.
pub fn update_survey_prompted(path: &Path, id: &str, now: DateTime<Utc>) -> Result<(), ConfigError> {
    update(path, |survey| survey.mark_prompted(id, now))
}

/// Record that survey `id` was taken, stored in `path`.
///
/// # Errors
///
/// Returns any read or write error of the config file.
pub fn update_survey_taken(path: &Path, id: &str, now: DateTime<Utc>) -> Result<(), ConfigError> {
    update(path, |survey| survey.mark_taken(id, now))
}

/// Apply `skaffold config set --survey <key> <value>` to `path`.
///
/// # Errors
///
/// Returns `ConfigError::UnknownKey` for keys outside [`SURVEY_KEYS`] and
/// `ConfigError::InvalidValue` if the value does not parse.
pub fn set_survey_value(path: &Path, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "disable-prompt" => {
            let disabled = value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: key.to_string(),
                    reason: e.to_string(),
                })?;
            update(path, |survey| survey.disable_prompt = disabled)
        }
        _ => Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: SURVEY_KEYS.to_vec(),
        }),
    }
}

/// Read-modify-write of the `[survey]` table only. Other tables, and keys
/// inside `[survey]` this crate does not know, are written back unchanged.
fn update(path: &Path, apply: impl FnOnce(&mut SurveyConfig)) -> Result<(), ConfigError> {
    let mut document = read_document(path)?;
    let mut survey: SurveyConfig = match document.get(SURVEY_TABLE) {
        Some(section) => section.clone().try_into()?,
        None => SurveyConfig::default(),
    };
    apply(&mut survey);

    let section = document
        .entry(SURVEY_TABLE)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    match (section, toml::Value::try_from(&survey)?) {
        (toml::Value::Table(existing), toml::Value::Table(updated)) => existing.extend(updated),
        (section, updated) => *section = updated,
    }
    write_document(path, &document)
}

fn read_document(path: &Path) -> Result<toml::Table, ConfigError> {
    if !path.exists() {
        return Ok(toml::Table::new());
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Persist `document` to `path`, creating parent directories as needed.
fn write_document(path: &Path, document: &toml::Table) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(document)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, rendered).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote global config");
    Ok(())
}
