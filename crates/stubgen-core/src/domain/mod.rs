//! Domain layer: the stub request entity and the pure text transformations.
//!
//! Nothing in this module performs I/O. Both transformations are pure
//! functions of their inputs, which is what makes rendering idempotent:
//! the same request state over the same raw text always yields the same
//! output.

pub mod request;
pub mod sections;
pub mod substitute;

pub use request::StubRequest;
pub use sections::remove_sections;
pub use substitute::substitute;
