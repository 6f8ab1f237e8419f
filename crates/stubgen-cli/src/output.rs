//! Output management and formatting.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Format resolution order: `--output-format` flag, then the config file's
/// `output.format`, then TTY auto-detection.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            parse_format(&config.output.format)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
        }
    }

    /// The format all commands should emit in.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Whether colour should be used on status decorations.
    pub fn use_color(&self) -> bool {
        !self.no_color && self.resolved_format == OutputFormat::Human
    }

    /// Payload output (rendered text, JSON envelopes).  Never suppressed
    /// and never decorated — this is the data the user asked for.
    pub fn payload(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Success indicator: `✓ <msg>`; suppressed in quiet mode.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.use_color() {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        writeln!(io::stderr(), "{line}")
    }
}

/// Parse a config-file format name.
///
/// Unknown names fall back to `auto` rather than erroring: a stale config
/// file should not make every invocation unusable.
fn parse_format(name: &str) -> OutputFormat {
    match name {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Probe {
        #[command(flatten)]
        global: GlobalArgs,
    }

    fn args(extra: &[&str]) -> GlobalArgs {
        let mut argv = vec!["probe"];
        argv.extend_from_slice(extra);
        Probe::parse_from(argv).global
    }

    fn config_with_format(format: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.output.format = format.into();
        config
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let output = OutputManager::new(&args(&[]), &config_with_format("json"));
        assert_eq!(output.format(), OutputFormat::Json);
    }

    #[test]
    fn flag_outranks_config_format() {
        let output = OutputManager::new(
            &args(&["--output-format", "plain"]),
            &config_with_format("json"),
        );
        assert_eq!(output.format(), OutputFormat::Plain);
    }

    #[test]
    fn unknown_config_format_falls_back_to_auto_detection() {
        let output = OutputManager::new(&args(&[]), &config_with_format("fancy"));
        // Auto resolves to Human or Plain depending on the test harness TTY;
        // either way it must not stay Auto.
        assert_ne!(output.format(), OutputFormat::Auto);
    }

    #[test]
    fn config_no_color_disables_colour() {
        let mut config = config_with_format("human");
        config.output.no_color = true;
        let output = OutputManager::new(&args(&[]), &config);
        assert!(!output.use_color());
    }
}
