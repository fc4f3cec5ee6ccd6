use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ConfigCommands, ConfigSetArgs};
use crate::output::output;

#[derive(Serialize)]
struct ConfigSetResponse {
    key: String,
    value: String,
    path: PathBuf,
}

/// Handle `skaffold config <subcommand>`.
pub fn handle(action: &ConfigCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Set(args) => set(args, flags),
        ConfigCommands::List => {
            let (_, config) = bootstrap::load_config(flags)?;
            output(&config, flags.format)
        }
    }
}

fn set(args: &ConfigSetArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.survey {
        bail!("config set: only survey settings are supported, pass --survey");
    }
    if !args.global {
        bail!("config set: survey settings are global, pass --global");
    }

    let path = bootstrap::config_path(flags)?;
    skaffold_config::set_survey_value(&path, &args.key, &args.value)?;
    tracing::debug!(key = %args.key, path = %path.display(), "updated global config");

    if flags.quiet {
        return Ok(());
    }
    output(
        &ConfigSetResponse {
            key: args.key.clone(),
            value: args.value.clone(),
            path,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(path: PathBuf) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            config: Some(path),
        }
    }

    fn args(survey: bool, global: bool) -> ConfigSetArgs {
        ConfigSetArgs {
            key: "disable-prompt".into(),
            value: "true".into(),
            survey,
            global,
        }
    }

    #[test]
    fn set_writes_the_global_file() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("config.toml");

        set(&args(true, true), &flags(path.clone())).expect("should set");

        let config = skaffold_config::GlobalConfig::read_file(&path).expect("should read");
        assert!(config.survey.disable_prompt);
    }

    #[test]
    fn set_requires_survey_and_global_flags() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let path = dir.path().join("config.toml");

        assert!(set(&args(false, true), &flags(path.clone())).is_err());
        assert!(set(&args(true, false), &flags(path.clone())).is_err());
        assert!(!path.exists());
    }
}
