use skaffold_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("invalid survey id {id:?} - please enter one of [{}]", .valid.join(" "))]
    UnknownId { id: String, valid: Vec<String> },

    #[error("duplicate survey id {0:?}")]
    DuplicateId(String),

    /// Writing the form text to the output sink failed.
    #[error(transparent)]
    Output(std::io::Error),

    /// The browser could not be launched.
    #[error(transparent)]
    BrowserOpen(std::io::Error),

    /// The prompted/taken marker could not be persisted.
    #[error(transparent)]
    ConfigUpdate(#[from] ConfigError),
}
