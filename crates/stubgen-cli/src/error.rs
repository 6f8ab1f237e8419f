//! Structured error handling for the stubgen CLI.
//!
//! Provides errors with user-friendly messages, actionable suggestions,
//! and exit-code mapping.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use stubgen_core::error::{ErrorCategory as CoreCategory, StubError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A `--set` entry that is not of the form `KEY=VALUE`.
    #[error("Invalid replacement '{entry}': expected KEY=VALUE")]
    InvalidReplacement { entry: String },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `stubgen-core`.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("Rendering failed: {0}")]
    Core(#[from] StubError),

    /// The rendered output could not be written.
    #[error("Could not write output to {path}")]
    WriteFailed { path: PathBuf },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::InvalidReplacement { entry } => vec![
                format!("'{entry}' has no '=' separator"),
                "Write replacements as KEY=VALUE, e.g. --set NAME=Ada".into(),
                "Quote values containing spaces: --set NAME=\"John Doe\"".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Default config location: {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::WriteFailed { path } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidReplacement { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::ConfigError,
            Self::Core(core_err) => match core_err.category() {
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::SystemError,
            },
            Self::WriteFailed { .. } | Self::IoError { .. } => ErrorCategory::SystemError,
        }
    }

    /// Map the category to an OS exit code.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::SystemError => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::ConfigError => 4,
        }
    }

    /// Emit a structured log event at the right severity.
    pub fn log(&self) {
        error!(category = ?self.category(), error = %self, "Command failed");
    }

    /// Format for a non-TTY stderr: message, cause chain, suggestions.
    pub fn format_plain(&self) -> String {
        let mut out = format!("error: {self}\n");
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str(&format!("  caused by: {err}\n"));
            cause = err.source();
        }
        for suggestion in self.suggestions() {
            out.push_str(&format!("  hint: {suggestion}\n"));
        }
        out
    }

    /// Same content as [`format_plain`](Self::format_plain), with colour.
    pub fn format_colored(&self) -> String {
        let mut out = format!("{} {self}\n", "error:".red().bold());
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str(&format!("  {} {err}\n", "caused by:".yellow()));
            cause = err.source();
        }
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {} {suggestion}\n", "hint:".cyan()));
        }
        out
    }
}

/// Error categories for exit-code and styling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    ConfigError,
    SystemError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_exit_code_3() {
        let err = CliError::from(StubError::NotFound {
            path: PathBuf::from("/stubs/x.txt"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bad_replacement_is_a_user_error() {
        let err = CliError::InvalidReplacement { entry: "NOEQ".into() };
        assert_eq!(err.exit_code(), 2);
        assert!(err.format_plain().contains("KEY=VALUE"));
    }

    #[test]
    fn plain_format_includes_the_cause_chain() {
        let err = CliError::Core(StubError::Render {
            template: "t.txt".into(),
            source: "bad pattern".into(),
        });
        let text = err.format_plain();
        assert!(text.contains("t.txt"));
        assert!(text.contains("caused by: bad pattern"));
    }
}
