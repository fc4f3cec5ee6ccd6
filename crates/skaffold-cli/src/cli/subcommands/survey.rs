use clap::{Args, Subcommand};
use skaffold_core::constants::{DEFAULT_SKAFFOLD_CONFIG, HATS};

#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct SurveyArgs {
    #[command(subcommand)]
    pub action: Option<SurveyCommands>,

    /// Survey to open.
    #[arg(long, default_value = HATS)]
    pub id: String,
}

/// Survey commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SurveyCommands {
    /// List known surveys and whether they apply to this project.
    List(SurveyListArgs),
    /// Show the survey prompt if it is due.
    #[command(hide = true)]
    Prompt,
}

#[derive(Clone, Debug, Args)]
pub struct SurveyListArgs {
    /// Project config used to decide survey relevance.
    #[arg(long, short = 'f', default_value = DEFAULT_SKAFFOLD_CONFIG)]
    pub filename: String,

    /// Include expired surveys and surveys that do not apply to the project.
    #[arg(long)]
    pub all: bool,
}
