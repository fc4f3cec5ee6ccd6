//! Survey section of the global config.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Days after taking a survey during which no prompt is shown.
pub const TAKEN_QUIET_DAYS: i64 = 90;

/// Days after a prompt during which it is not shown again.
pub const PROMPTED_QUIET_DAYS: i64 = 10;

/// Per-survey markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSurvey {
    pub id: String,
    #[serde(default)]
    pub prompted: bool,
    #[serde(default)]
    pub taken: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurveyConfig {
    /// Never show the survey prompt.
    #[serde(default)]
    pub disable_prompt: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_prompted: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_taken: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_surveys: Vec<UserSurvey>,
}

impl SurveyConfig {
    /// Whether the prompt may be shown at `now`.
    ///
    /// Suppressed when disabled, when any survey was taken in the last
    /// [`TAKEN_QUIET_DAYS`], or when the prompt was shown in the last
    /// [`PROMPTED_QUIET_DAYS`].
    #[must_use]
    pub fn should_display_prompt(&self, now: DateTime<Utc>) -> bool {
        if self.disable_prompt {
            return false;
        }
        !(within(self.last_taken, now, TAKEN_QUIET_DAYS)
            || within(self.last_prompted, now, PROMPTED_QUIET_DAYS))
    }

    /// Record that survey `id` was prompted at `now`.
    pub fn mark_prompted(&mut self, id: &str, now: DateTime<Utc>) {
        self.last_prompted = Some(now);
        self.entry(id).prompted = true;
    }

    /// Record that survey `id` was taken at `now`.
    pub fn mark_taken(&mut self, id: &str, now: DateTime<Utc>) {
        self.last_taken = Some(now);
        self.entry(id).taken = true;
    }

    #[must_use]
    pub fn is_taken(&self, id: &str) -> bool {
        self.user_surveys.iter().any(|s| s.id == id && s.taken)
    }

    fn entry(&mut self, id: &str) -> &mut UserSurvey {
        let index = match self.user_surveys.iter().position(|s| s.id == id) {
            Some(index) => index,
            None => {
                self.user_surveys.push(UserSurvey {
                    id: id.to_string(),
                    ..UserSurvey::default()
                });
                self.user_surveys.len() - 1
            }
        };
        &mut self.user_surveys[index]
    }
}

fn within(at: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> bool {
    at.is_some_and(|at| now.signed_duration_since(at) < TimeDelta::days(days))
}
