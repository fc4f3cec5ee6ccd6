mod list;
mod open;
mod prompt;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SurveyArgs, SurveyCommands};

/// Handle `skaffold survey [<subcommand>]`.
pub fn handle(args: &SurveyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.action {
        None => open::handle(&args.id, flags),
        Some(SurveyCommands::List(list_args)) => list::handle(list_args, flags),
        Some(SurveyCommands::Prompt) => prompt::handle(flags),
    }
}
