//! Implementation of the `stubgen render` command.

use tracing::{debug, instrument};

use crate::{
    cli::{OutputFormat, RenderArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `stubgen render`: render the template and print it to stdout.
#[instrument(skip_all, fields(template = %args.template.display()))]
pub fn execute(
    args: RenderArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let renderer = super::build_renderer(&global, &config);
    let request = super::build_request(args.template.clone(), &args.pipeline)?;

    debug!(
        base_dir = %renderer.effective_base_dir().display(),
        replacements = request.replacements().len(),
        sections = request.removed_sections().len(),
        "Render started"
    );

    let text = if args.lossy {
        renderer.render_lossy(&request)
    } else {
        renderer.render(&request)?
    };

    match output.format() {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "template": args.template,
                "text": text,
            });
            output.payload(&envelope.to_string())?;
        }
        _ => output.payload(&text)?,
    }

    Ok(())
}
