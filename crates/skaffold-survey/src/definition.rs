//! Survey definitions.

use chrono::{DateTime, Utc};
use skaffold_core::VersionedConfig;
use skaffold_core::constants::HATS;

/// Decides whether a survey applies to the loaded project configs.
pub type RelevanceFn = fn(&[&dyn VersionedConfig]) -> bool;

const HATS_URL: &str = "https://forms.gle/BMTbGQXLWSdn7vEs6";

/// The default Happiness Tracking Survey. Never expires, always relevant.
pub static HATS_SURVEY: Survey = Survey::new(
    HATS,
    "Help improve Skaffold with our 2-minute anonymous survey",
    HATS_URL,
);

/// A single survey item. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct Survey {
    id: &'static str,
    prompt_text: &'static str,
    link: &'static str,
    expires_at: Option<DateTime<Utc>>,
    is_relevant_fn: RelevanceFn,
}

impl Survey {
    /// A survey that never expires and is relevant to every project.
    #[must_use]
    pub const fn new(id: &'static str, prompt_text: &'static str, link: &'static str) -> Self {
        Self {
            id,
            prompt_text,
            link,
            expires_at: None,
            is_relevant_fn: always_relevant,
        }
    }

    #[must_use]
    pub const fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    #[must_use]
    pub const fn relevant_when(mut self, predicate: RelevanceFn) -> Self {
        self.is_relevant_fn = predicate;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn link(&self) -> &'static str {
        self.link
    }

    #[must_use]
    pub const fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// True if the survey has no expiry or expires strictly after `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }

    #[must_use]
    pub fn is_relevant(&self, configs: &[&dyn VersionedConfig]) -> bool {
        (self.is_relevant_fn)(configs)
    }

    /// One-line invitation with the command that opens this survey.
    #[must_use]
    pub fn prompt(&self) -> String {
        if self.id == HATS {
            format!("{}: run 'skaffold survey'\n", self.prompt_text)
        } else {
            format!("{}: run 'skaffold survey -id {}'\n", self.prompt_text, self.id)
        }
    }
}

const fn always_relevant(_: &[&dyn VersionedConfig]) -> bool {
    true
}
