//! Stub renderer - the application orchestrator.
//!
//! Owns the full render lifecycle:
//! 1. Resolve the template path against the base directory
//! 2. Read the raw text
//! 3. Strip sections marked for removal
//! 4. Substitute placeholders
//! 5. Return the text (or persist it via [`StubRenderer::save_to`])

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{StubRequest, remove_sections, substitute},
    error::{StubError, StubResult},
};

/// Directory name the default base-path rule looks for.
const DEFAULT_STUB_DIR: &str = "stubs";

/// Renders [`StubRequest`]s into text.
///
/// The base directory is explicit per-instance state rather than anything
/// process-global: two renderers with different base directories never
/// interfere, and a renderer behind a shared reference is safe to use from
/// multiple threads (nothing here mutates during rendering).
///
/// ```no_run
/// use stubgen_core::application::StubRenderer;
/// use stubgen_core::domain::StubRequest;
/// # fn fs() -> Box<dyn stubgen_core::application::Filesystem> { unimplemented!() }
///
/// let renderer = StubRenderer::new(fs()).with_base_dir("templates");
/// let request = StubRequest::new("main.rs.stub").with_replacement("name", "demo");
/// let text = renderer.render(&request)?;
/// # Ok::<(), stubgen_core::error::StubError>(())
/// ```
pub struct StubRenderer {
    filesystem: Box<dyn Filesystem>,
    base_dir: Option<PathBuf>,
}

impl StubRenderer {
    /// Create a renderer with no base directory configured.
    ///
    /// Until one is set, paths resolve against [`default_base_dir`].
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            base_dir: None,
        }
    }

    /// Set the base directory at construction time.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Reassign or unset the base directory.
    ///
    /// Affects subsequently resolved requests only — nothing is cached, so
    /// previously rendered output is never retroactively changed.
    pub fn set_base_dir(&mut self, dir: Option<PathBuf>) {
        self.base_dir = dir;
    }

    /// The configured base directory, or `None` when unset.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// The directory the next resolution will actually use.
    pub fn effective_base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(default_base_dir)
    }

    /// Resolve a relative template path to an absolute location.
    ///
    /// Joins the base directory (or the default rule when unset) with the
    /// template path using plain path-joining. Parent-directory segments are
    /// neither collapsed nor rejected: a template path containing `..` can
    /// escape the base directory, so callers must only pass template paths
    /// they trust.
    ///
    /// Fails with [`StubError::NotFound`] when the result does not reference
    /// an existing file; the error carries the resolved path.
    pub fn resolve(&self, template: &Path) -> StubResult<PathBuf> {
        let resolved = self.effective_base_dir().join(template);
        if !self.filesystem.is_file(&resolved) {
            return Err(StubError::NotFound { path: resolved });
        }
        Ok(resolved)
    }

    /// Render the request into its final text.
    ///
    /// Re-reads the template from disk on every call. A missing or
    /// unreadable file surfaces as [`StubError::NotFound`] (never wrapped);
    /// any failure in section removal or substitution is normalized into
    /// [`StubError::Render`] carrying the logical template path and cause.
    /// No partial output: the result is the fully transformed text or an
    /// error.
    #[instrument(skip_all, fields(template = %request.template().display()))]
    pub fn render(&self, request: &StubRequest) -> StubResult<String> {
        // 1. Resolve and load - fail fast if the file is absent.
        let resolved = self.resolve(request.template())?;
        let raw = self.load(&resolved)?;
        debug!(path = %resolved.display(), bytes = raw.len(), "Stub loaded");

        // 2. Strip sections, 3. substitute placeholders.
        let wrap = |source: regex::Error| StubError::Render {
            template: request.template().display().to_string(),
            source: Box::new(source),
        };
        let stripped = remove_sections(
            &raw,
            request.removed_sections().iter().map(String::as_str),
        )
        .map_err(wrap)?;
        let rendered = substitute(&stripped, request.replacements()).map_err(wrap)?;

        debug!(
            replacements = request.replacements().len(),
            sections_removed = request.removed_sections().len(),
            "Stub rendered"
        );
        Ok(rendered)
    }

    /// Alias for [`render`](Self::render).
    ///
    /// Kept for call sites that read better as "give me the text".
    pub fn text(&self, request: &StubRequest) -> StubResult<String> {
        self.render(request)
    }

    /// Best-effort render that cannot fail outward.
    ///
    /// On failure the result is a descriptive inline string instead of an
    /// error — the one place in this crate where failures are swallowed by
    /// design. Useful for logging and display contexts.
    pub fn render_lossy(&self, request: &StubRequest) -> String {
        match self.render(request) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Best-effort render failed");
                format!("<failed to render stub '{}': {e}>", request.template().display())
            }
        }
    }

    /// Render the request and write the result to `directory/filename`.
    ///
    /// Ensures `directory` exists (creating all missing parents) and
    /// overwrites any existing file without warning. Render failures
    /// propagate as typed errors; only the directory-creation/write step
    /// collapses into the boolean outcome (`Ok(false)` on write failure).
    #[instrument(skip_all, fields(
        template = %request.template().display(),
        directory = %directory.display(),
        filename,
    ))]
    pub fn save_to(
        &self,
        request: &StubRequest,
        directory: &Path,
        filename: &str,
    ) -> StubResult<bool> {
        let rendered = self.render(request)?;

        if let Err(e) = self.filesystem.create_dir_all(directory) {
            warn!(error = %e, "Could not create output directory");
            return Ok(false);
        }

        let target = directory.join(filename);
        match self.filesystem.write_file(&target, &rendered) {
            Ok(()) => {
                info!(path = %target.display(), bytes = rendered.len(), "Stub written");
                Ok(true)
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "Write failed");
                Ok(false)
            }
        }
    }

    /// Read the resolved file, mapping every failure to `NotFound`.
    ///
    /// This layer deliberately does not distinguish "missing" from
    /// "unreadable": by the time we get here the path passed an existence
    /// check, but the file can still vanish or deny permission between
    /// check and read.
    fn load(&self, resolved: &Path) -> StubResult<String> {
        self.filesystem
            .read_to_string(resolved)
            .map_err(|_| StubError::NotFound {
                path: resolved.to_path_buf(),
            })
    }
}

/// The conventional default base directory: a `stubs/` directory next to
/// the running executable, falling back to `./stubs` when the executable
/// location cannot be determined.
///
/// A pure resolution rule rather than shared mutable state — callers that
/// want a different default simply configure the renderer explicitly.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(DEFAULT_STUB_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STUB_DIR))
}
