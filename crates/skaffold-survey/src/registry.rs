//! The table of known surveys.
//!
//! The built-in table is created once per process and never mutated.
//! Custom tables can be assembled with [`SurveyRegistry::from_surveys`].

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use skaffold_core::VersionedConfig;
use skaffold_core::constants::HATS;

use crate::definition::{HATS_SURVEY, Survey};
use crate::error::SurveyError;

static BUILTIN: LazyLock<SurveyRegistry> = LazyLock::new(|| SurveyRegistry {
    surveys: vec![HATS_SURVEY],
});

#[derive(Debug, Clone)]
pub struct SurveyRegistry {
    surveys: Vec<Survey>,
}

impl SurveyRegistry {
    /// The surveys shipped with this build.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a registry from `surveys`, in order.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::DuplicateId` if two surveys share an id.
    pub fn from_surveys(surveys: Vec<Survey>) -> Result<Self, SurveyError> {
        let mut seen = HashSet::new();
        for survey in &surveys {
            if !seen.insert(survey.id()) {
                return Err(SurveyError::DuplicateId(survey.id().to_string()));
            }
        }
        Ok(Self { surveys })
    }

    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Survey> {
        self.surveys.iter().find(|s| s.id() == id)
    }

    /// Registered ids in registration order.
    #[must_use]
    pub fn valid_ids(&self) -> Vec<&'static str> {
        self.surveys.iter().map(Survey::id).collect()
    }

    /// The survey used for the periodic prompt.
    ///
    /// Falls back to the built-in HaTS entry when a custom table omits it.
    #[must_use]
    pub fn default_survey(&self) -> &Survey {
        self.lookup(HATS).unwrap_or(&HATS_SURVEY)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Survey> {
        self.surveys.iter()
    }

    /// Surveys both active at `now` and relevant to `configs`.
    #[must_use]
    pub fn active_relevant<'a>(
        &'a self,
        configs: &'a [&'a dyn VersionedConfig],
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &'a Survey> {
        self.surveys
            .iter()
            .filter(move |s| s.is_active(now) && s.is_relevant(configs))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 8, 14, 0, 0, 0).unwrap()
    }

    fn never(_: &[&dyn VersionedConfig]) -> bool {
        false
    }

    #[test]
    fn builtin_has_hats_only() {
        let registry = SurveyRegistry::builtin();
        assert_eq!(registry.valid_ids(), vec!["hats"]);
        assert_eq!(registry.default_survey().id(), "hats");
    }

    #[test]
    fn builtin_ids_are_unique() {
        let surveys = SurveyRegistry::builtin().iter().copied().collect();
        assert!(SurveyRegistry::from_surveys(surveys).is_ok());
    }

    #[test]
    fn lookup_by_id() {
        let registry = SurveyRegistry::builtin();
        assert_eq!(
            registry.lookup("hats").map(Survey::link),
            Some("https://forms.gle/BMTbGQXLWSdn7vEs6")
        );
        assert!(registry.lookup("foo").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SurveyRegistry::from_surveys(vec![
            Survey::new("foo", "", ""),
            Survey::new("foo", "", ""),
        ])
        .expect_err("should reject");
        assert!(matches!(err, SurveyError::DuplicateId(id) if id == "foo"));
    }

    #[test]
    fn default_survey_falls_back_to_hats() {
        let registry = SurveyRegistry::from_surveys(vec![Survey::new("foo", "", "")])
            .expect("unique ids");
        assert_eq!(registry.default_survey().id(), "hats");
    }

    #[test]
    fn active_relevant_filters_expired_and_irrelevant() {
        let registry = SurveyRegistry::from_surveys(vec![
            HATS_SURVEY,
            Survey::new("expired", "", "")
                .expires_at(Utc.with_ymd_and_hms(2020, 8, 14, 0, 0, 0).unwrap()),
            Survey::new("irrelevant", "", "").relevant_when(never),
            Survey::new("upcoming", "", "")
                .expires_at(Utc.with_ymd_and_hms(2022, 8, 14, 0, 0, 0).unwrap()),
        ])
        .expect("unique ids");

        let ids: Vec<&str> = registry
            .active_relevant(&[], now())
            .map(Survey::id)
            .collect();
        assert_eq!(ids, vec!["hats", "upcoming"]);
    }
}
