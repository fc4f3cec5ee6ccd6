use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use skaffold_config::SurveyConfig;
use skaffold_core::{ProjectConfig, VersionedConfig};
use skaffold_survey::{Survey, SurveyRegistry};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::SurveyListArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SurveyListEntry {
    id: &'static str,
    link: &'static str,
    active: bool,
    relevant: bool,
    taken: bool,
    expires_at: Option<String>,
}

/// Handle `skaffold survey list`.
pub fn handle(args: &SurveyListArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (_, config) = bootstrap::load_config(flags)?;
    let projects = load_projects(Path::new(&args.filename))?;
    let configs: Vec<&dyn VersionedConfig> =
        projects.iter().map(|p| p as &dyn VersionedConfig).collect();

    let entries = build_entries(
        SurveyRegistry::builtin(),
        &configs,
        &config.survey,
        Utc::now(),
        args.all,
    );
    output(&entries, flags.format)
}

fn load_projects(path: &Path) -> anyhow::Result<Vec<ProjectConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no project config; relevance uses no configs");
        return Ok(Vec::new());
    }
    ProjectConfig::load_all(path)
        .with_context(|| format!("failed to read project config {}", path.display()))
}

fn build_entries(
    registry: &SurveyRegistry,
    configs: &[&dyn VersionedConfig],
    survey_config: &SurveyConfig,
    now: DateTime<Utc>,
    all: bool,
) -> Vec<SurveyListEntry> {
    let surveys: Vec<&Survey> = if all {
        registry.iter().collect()
    } else {
        registry.active_relevant(configs, now).collect()
    };
    surveys
        .into_iter()
        .map(|survey| SurveyListEntry {
            id: survey.id(),
            link: survey.link(),
            active: survey.is_active(now),
            relevant: survey.is_relevant(configs),
            taken: survey_config.is_taken(survey.id()),
            expires_at: survey.expiry().map(|at| at.to_rfc3339()),
        })
        .collect()
}
