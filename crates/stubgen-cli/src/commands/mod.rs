//! Command handlers.
//!
//! Each handler translates CLI arguments into core types, calls the
//! renderer, and displays results.  No business logic lives here.

pub mod base_dir;
pub mod completions;
pub mod render;
pub mod save;

use std::path::PathBuf;

use stubgen_adapters::LocalFilesystem;
use stubgen_core::prelude::*;

use crate::{
    cli::{GlobalArgs, PipelineArgs},
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build a renderer with the effective base directory.
///
/// Priority: `--base-dir` flag (or `STUBGEN_BASE_DIR`) > config file >
/// the renderer's built-in default rule.
pub(crate) fn build_renderer(global: &GlobalArgs, config: &AppConfig) -> StubRenderer {
    let renderer = StubRenderer::new(Box::new(LocalFilesystem::new()));
    match global.base_dir.clone().or_else(|| config.base_dir.clone()) {
        Some(dir) => renderer.with_base_dir(dir),
        None => renderer,
    }
}

/// Build a request from the template path and the shared pipeline flags.
pub(crate) fn build_request(template: PathBuf, pipeline: &PipelineArgs) -> CliResult<StubRequest> {
    let mut request = StubRequest::new(template);
    for entry in &pipeline.set {
        let (key, value) = parse_replacement(entry)?;
        request = request.with_replacement(key, value);
    }
    for name in &pipeline.remove_section {
        if name.is_empty() {
            return Err(CliError::InvalidInput {
                message: "section names must be non-empty".into(),
            });
        }
        request = request.with_section_removed(name.clone());
    }
    Ok(request)
}

/// Split a `KEY=VALUE` argument at the first `=`.
fn parse_replacement(entry: &str) -> CliResult<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::InvalidReplacement {
            entry: entry.to_string(),
        }),
    }
}
