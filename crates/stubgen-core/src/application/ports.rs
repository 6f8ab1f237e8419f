//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `stubgen-adapters` crate provides implementations.

use std::io;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stubgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The port speaks `io::Result` so adapters stay trivial; mapping into the
/// two-variant [`StubError`](crate::error::StubError) taxonomy is the
/// renderer's job, not the adapter's.
pub trait Filesystem: Send + Sync {
    /// Read an entire file into memory as text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check whether the path references an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;
}
