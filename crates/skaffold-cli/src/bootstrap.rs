use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;

/// The global config file commands read and write.
pub fn config_path(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    if let Some(path) = &flags.config {
        return Ok(path.clone());
    }
    skaffold_config::default_config_path().context("failed to locate the global config file")
}

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<(PathBuf, skaffold_config::GlobalConfig)> {
    let path = config_path(flags)?;
    let config = skaffold_config::GlobalConfig::load(&path)
        .with_context(|| format!("failed to load global config at {}", path.display()))?;
    Ok((path, config))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::config_path;
    use crate::cli::{GlobalFlags, OutputFormat};

    #[test]
    fn explicit_config_flag_wins() {
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            config: Some("/tmp/skaffold.toml".into()),
        };
        let path = config_path(&flags).expect("should resolve");
        assert_eq!(path, Path::new("/tmp/skaffold.toml"));
    }
}
