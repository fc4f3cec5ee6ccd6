//! Survey prompt display and form opening.
//!
//! Side effects of [`Runner::open_form`] run in a fixed order: the form text
//! is written, then the browser is launched, then the "taken" marker is
//! recorded. The first failure stops the sequence.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use owo_colors::OwoColorize;
use skaffold_config::ConfigError;

use crate::error::SurveyError;
use crate::registry::SurveyRegistry;

/// Text printed before the browser is launched.
#[must_use]
pub fn form_text(link: &str) -> String {
    format!(
        "Thank you for offering your feedback on Skaffold! Understanding your experiences and opinions helps us make Skaffold better for you and other users.

Skaffold will now attempt to open the survey in your default web browser. You may also manually open it using this link:

{link}

Tip: To permanently disable the survey prompt, run:
   skaffold config set --survey --global disable-prompt true"
    )
}

/// A writer that knows whether it is attached to an interactive terminal.
pub trait OutputSink: Write {
    fn is_terminal(&self) -> bool;
}

impl OutputSink for io::Stdout {
    fn is_terminal(&self) -> bool {
        io::IsTerminal::is_terminal(self)
    }
}

impl OutputSink for Vec<u8> {
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Persists the "prompted" and "taken" markers.
pub trait SurveyStore {
    /// # Errors
    ///
    /// Returns the store's error if the marker cannot be persisted.
    fn mark_prompted(&self, config_file: &Path, id: &str) -> Result<(), ConfigError>;

    /// # Errors
    ///
    /// Returns the store's error if the marker cannot be persisted.
    fn mark_taken(&self, config_file: &Path, id: &str) -> Result<(), ConfigError>;
}

/// Launches a URL in the user's browser.
pub trait BrowserOpener {
    /// # Errors
    ///
    /// Returns an error if no browser process could be started.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Markers in the global config file, stamped with the current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSurveyStore;

impl SurveyStore for GlobalSurveyStore {
    fn mark_prompted(&self, config_file: &Path, id: &str) -> Result<(), ConfigError> {
        skaffold_config::update_survey_prompted(config_file, id, Utc::now())
    }

    fn mark_taken(&self, config_file: &Path, id: &str) -> Result<(), ConfigError> {
        skaffold_config::update_survey_taken(config_file, id, Utc::now())
    }
}

/// The platform's default browser, launched without waiting for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

#[derive(Debug)]
pub struct Runner<S = GlobalSurveyStore, B = SystemBrowser> {
    config_file: PathBuf,
    registry: SurveyRegistry,
    store: S,
    browser: B,
}

impl Runner {
    /// Runner over the built-in surveys, the global config store and the
    /// system browser.
    #[must_use]
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self::with_parts(
            config_file,
            SurveyRegistry::builtin().clone(),
            GlobalSurveyStore,
            SystemBrowser,
        )
    }
}

impl<S: SurveyStore, B: BrowserOpener> Runner<S, B> {
    #[must_use]
    pub fn with_parts(
        config_file: impl Into<PathBuf>,
        registry: SurveyRegistry,
        store: S,
        browser: B,
    ) -> Self {
        Self {
            config_file: config_file.into(),
            registry,
            store,
            browser,
        }
    }

    /// Show the default survey prompt on interactive terminals and record
    /// that it was prompted.
    ///
    /// The marker is recorded whether or not anything was written.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::ConfigUpdate` if the marker cannot be persisted.
    pub fn display_prompt<W: OutputSink + ?Sized>(&self, out: &mut W) -> Result<(), SurveyError> {
        let survey = self.registry.default_survey();
        if out.is_terminal()
            && let Err(error) = write!(out, "{}", survey.prompt().green())
        {
            tracing::debug!(%error, "could not write survey prompt");
        }
        self.store.mark_prompted(&self.config_file, survey.id())?;
        Ok(())
    }

    /// Print the form link, open it in the browser and record the survey as
    /// taken.
    ///
    /// # Errors
    ///
    /// - `SurveyError::UnknownId` if `id` is not registered; nothing else happens.
    /// - `SurveyError::Output` if the form text cannot be written.
    /// - `SurveyError::BrowserOpen` if the browser cannot be launched.
    /// - `SurveyError::ConfigUpdate` if the marker cannot be persisted.
    pub fn open_form<W: Write + ?Sized>(&self, out: &mut W, id: &str) -> Result<(), SurveyError> {
        let survey = self
            .registry
            .lookup(id)
            .ok_or_else(|| SurveyError::UnknownId {
                id: id.to_string(),
                valid: self
                    .registry
                    .valid_ids()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })?;

        writeln!(out, "{}", form_text(survey.link())).map_err(SurveyError::Output)?;

        if let Err(error) = self.browser.open(survey.link()) {
            tracing::debug!(url = survey.link(), %error, "could not open url");
            return Err(SurveyError::BrowserOpen(error));
        }

        self.store.mark_taken(&self.config_file, survey.id())?;
        Ok(())
    }
}
