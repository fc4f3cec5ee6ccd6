//! Environment variable overrides for the global config.
//!
//! Uses figment::Jail for sandboxed env var manipulation.

use std::path::Path;

use figment::Jail;
use skaffold_config::{GlobalConfig, update_survey_prompted};

#[test]
fn env_overrides_file_value() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[survey]\ndisable_prompt = false\n")?;
        jail.set_env("SKAFFOLD_SURVEY__DISABLE_PROMPT", "true");

        let config = GlobalConfig::load(Path::new("config.toml")).expect("should load");
        assert!(config.survey.disable_prompt);
        Ok(())
    });
}

#[test]
fn env_overrides_are_not_persisted() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[survey]\ndisable_prompt = false\n")?;
        jail.set_env("SKAFFOLD_SURVEY__DISABLE_PROMPT", "true");

        update_survey_prompted(Path::new("config.toml"), "hats", chrono::Utc::now())
            .expect("should write");

        let stored = GlobalConfig::read_file(Path::new("config.toml")).expect("should read");
        assert!(!stored.survey.disable_prompt);
        assert!(stored.survey.last_prompted.is_some());
        Ok(())
    });
}

#[test]
fn load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = GlobalConfig::load(Path::new("absent.toml")).expect("should load");
        assert_eq!(config, GlobalConfig::default());
        Ok(())
    });
}
