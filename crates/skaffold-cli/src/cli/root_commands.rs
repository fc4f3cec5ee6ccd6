use clap::Subcommand;

use crate::cli::subcommands::{ConfigCommands, SurveyArgs};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Opens a web browser to fill out the Skaffold survey.
    Survey(SurveyArgs),
    /// Interact with the global Skaffold config file.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}
