use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Survey(args) => commands::survey::handle(args, flags),
        Commands::Config { action } => commands::config::handle(action, flags),
    }
}
