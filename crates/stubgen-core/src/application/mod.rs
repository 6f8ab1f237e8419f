//! Application layer: the render orchestrator and its driven ports.

pub mod ports;
pub mod renderer;

pub use ports::Filesystem;
pub use renderer::{StubRenderer, default_base_dir};
