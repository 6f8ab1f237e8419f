//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubgen",
    bin_name = "stubgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Render boilerplate files from stub templates",
    long_about = "Stubgen loads a stub template, strips sections marked for \
                  removal, substitutes $NAME$ / {{NAME}} placeholders, and \
                  prints or saves the result.",
    after_help = "EXAMPLES:\n\
        \x20 stubgen render greeting.txt --set NAME=\"John Doe\" --set EMAIL=john@example.com\n\
        \x20 stubgen render service.rs.stub --remove-section metrics\n\
        \x20 stubgen save config.yml.stub --out-dir ./deploy --filename config.yml --set ENV=prod\n\
        \x20 stubgen base-dir",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a stub template to stdout.
    #[command(
        visible_alias = "r",
        about = "Render a template to stdout",
        after_help = "EXAMPLES:\n\
            \x20 stubgen render greeting.txt --set NAME=Ada\n\
            \x20 stubgen render app.toml.stub --set PORT=8080 --remove-section tls\n\
            \x20 stubgen render broken.txt --lossy"
    )]
    Render(RenderArgs),

    /// Render a stub template and write it to a file.
    #[command(
        visible_alias = "s",
        about = "Render a template and save it",
        after_help = "EXAMPLES:\n\
            \x20 stubgen save main.rs.stub --out-dir src --filename main.rs --set NAME=demo\n\
            \x20 stubgen save ci.yml.stub  --out-dir .github/workflows --filename ci.yml"
    )]
    Save(SaveArgs),

    /// Print the effective base directory for template resolution.
    #[command(
        about = "Show the effective base directory",
        after_help = "EXAMPLES:\n\
            \x20 stubgen base-dir\n\
            \x20 stubgen --base-dir ./templates base-dir"
    )]
    BaseDir,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubgen completions bash > ~/.local/share/bash-completion/completions/stubgen\n\
            \x20 stubgen completions zsh  > ~/.zfunc/_stubgen"
    )]
    Completions(CompletionsArgs),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `stubgen render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template path, relative to the base directory.
    #[arg(value_name = "TEMPLATE", help = "Relative template path")]
    pub template: PathBuf,

    /// Replacement entries shared with `save`.
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Never fail: on error, print an inline error string instead.
    #[arg(long = "lossy", help = "Emit an inline error string instead of failing")]
    pub lossy: bool,
}

/// Arguments for `stubgen save`.
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Template path, relative to the base directory.
    #[arg(value_name = "TEMPLATE", help = "Relative template path")]
    pub template: PathBuf,

    /// Replacement entries shared with `render`.
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Target directory; created (with parents) if absent.
    #[arg(
        short = 'o',
        long = "out-dir",
        value_name = "DIR",
        help = "Output directory (created if missing)"
    )]
    pub out_dir: PathBuf,

    /// Output filename inside the target directory.
    #[arg(
        short = 'f',
        long = "filename",
        value_name = "NAME",
        help = "Output filename"
    )]
    pub filename: String,
}

/// The replacement/section flags shared by `render` and `save`.
#[derive(Debug, Args)]
pub struct PipelineArgs {
    /// `KEY=VALUE` replacement entries; repeatable.  Keys are matched
    /// case-insensitively against template placeholders.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        help = "Add a replacement (repeatable)"
    )]
    pub set: Vec<String>,

    /// Section names to strip from the template; repeatable.
    #[arg(
        short = 'r',
        long = "remove-section",
        value_name = "NAME",
        help = "Remove a named section (repeatable)"
    )]
    pub remove_section: Vec<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Supported completion shells.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
