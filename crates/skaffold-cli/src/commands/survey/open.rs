use skaffold_survey::Runner;

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Handle `skaffold survey [--id <id>]`.
pub fn handle(id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = bootstrap::config_path(flags)?;
    let runner = Runner::new(path);
    runner.open_form(&mut std::io::stdout(), id)?;
    Ok(())
}
