use clap::{Args, Subcommand};

/// Global config commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Set a value in the global config.
    Set(ConfigSetArgs),
    /// Show the effective global config.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigSetArgs {
    /// Config key, e.g. disable-prompt.
    pub key: String,
    /// New value.
    pub value: String,
    /// Set a survey setting.
    #[arg(long)]
    pub survey: bool,
    /// Write to the global config.
    #[arg(long, short = 'g')]
    pub global: bool,
}
