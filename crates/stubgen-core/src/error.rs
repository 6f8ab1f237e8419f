//! Unified error handling for the stubgen core.
//!
//! The render pipeline exposes exactly two failure kinds so that callers have
//! a small, stable surface to match on: a missing/unreadable template file
//! ([`StubError::NotFound`]) and everything that goes wrong after the file
//! was loaded ([`StubError::Render`]).

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for stub rendering operations.
#[derive(Debug, Error)]
pub enum StubError {
    /// The resolved template file does not exist or could not be read.
    ///
    /// Raised at the earliest point the file is needed and never wrapped
    /// into [`StubError::Render`], so callers that specifically handle
    /// missing templates can match on it directly. The load step does not
    /// distinguish "missing" from "unreadable" — a permission failure
    /// surfaces here too.
    #[error("stub template not found: {path}")]
    NotFound {
        /// The resolved absolute path that was attempted.
        path: PathBuf,
    },

    /// Section removal or placeholder substitution failed mid-pipeline.
    ///
    /// Wraps the original cause for diagnostic chaining. Anything that is
    /// not a load failure is normalized into this variant.
    #[error("failed to render stub '{template}'")]
    Render {
        /// The logical (caller-supplied) template path.
        template: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StubError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { path } => vec![
                format!("No stub template at: {}", path.display()),
                "Check the template path for typos".into(),
                "Set the base directory if your stubs live elsewhere".into(),
            ],
            Self::Render { template, .. } => vec![
                format!("Rendering '{template}' failed"),
                "Check replacement keys and section names for unusual characters".into(),
            ],
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Render { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type StubResult<T> = Result<T, StubError>;
