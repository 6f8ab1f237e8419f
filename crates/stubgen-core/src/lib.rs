//! Stubgen Core - stub template processing.
//!
//! This crate owns the full render lifecycle for stub templates: resolve a
//! relative template path against a base directory, read the raw text,
//! strip sections marked for removal, substitute `$NAME$` / `{{NAME}}`
//! placeholders, and return the final text (or persist it to disk).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stubgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application (StubRenderer)       │
//! │   resolve → load → strip → substitute   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Ports (Filesystem trait)          │
//! │   implemented by stubgen-adapters       │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Domain (StubRequest, pure text      │
//! │     transformations, no I/O)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stubgen_core::prelude::*;
//! # fn fs() -> Box<dyn Filesystem> { unimplemented!() }
//!
//! let renderer = StubRenderer::new(fs()).with_base_dir("templates");
//!
//! let request = StubRequest::new("greeting.txt")
//!     .with_replacement("name", "John Doe")
//!     .with_section_removed("optional");
//!
//! let text = renderer.render(&request)?;
//! let saved = renderer.save_to(&request, "out".as_ref(), "greeting.txt")?;
//! # Ok::<(), StubError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, StubRenderer, default_base_dir};
    pub use crate::domain::StubRequest;
    pub use crate::error::{StubError, StubResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
