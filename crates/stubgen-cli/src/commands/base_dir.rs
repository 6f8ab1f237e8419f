//! Implementation of the `stubgen base-dir` command.

use crate::{
    cli::global::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager,
};

/// Print the directory the renderer would resolve templates against.
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let renderer = super::build_renderer(&global, &config);
    output.payload(&renderer.effective_base_dir().display().to_string())?;
    Ok(())
}
