//! Implementation of the `stubgen save` command.

use tracing::{info, instrument};

use crate::{
    cli::{SaveArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `stubgen save`: render the template and persist it.
///
/// Render failures propagate typed (missing template exits 3); a failed
/// write surfaces as [`CliError::WriteFailed`] (exit 1).
#[instrument(skip_all, fields(template = %args.template.display()))]
pub fn execute(
    args: SaveArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let renderer = super::build_renderer(&global, &config);
    let request = super::build_request(args.template.clone(), &args.pipeline)?;

    let target = args.out_dir.join(&args.filename);
    info!(target = %target.display(), "Save started");

    let written = renderer.save_to(&request, &args.out_dir, &args.filename)?;
    if !written {
        return Err(CliError::WriteFailed { path: target });
    }

    output.success(&format!("Wrote {}", target.display()))?;
    Ok(())
}
