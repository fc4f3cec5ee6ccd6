use chrono::Utc;
use skaffold_survey::Runner;

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Handle `skaffold survey prompt`: show the prompt only when it is due.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let (path, config) = bootstrap::load_config(flags)?;

    if !config.survey.should_display_prompt(Utc::now()) {
        tracing::debug!(path = %path.display(), "survey prompt suppressed");
        return Ok(());
    }

    Runner::new(path).display_prompt(&mut std::io::stdout())?;
    Ok(())
}
