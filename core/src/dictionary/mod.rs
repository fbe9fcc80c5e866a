//! dictionary/mod.rs
//! Named, pre-built compression dictionaries.
//!
//! Notes:
//! - Dictionaries are consumed, never trained here.
//! - Each name maps to one encode handle and one decode handle, compiled together.
//! - The registry is shared process-wide through the engine; see `registry.rs`
//!   for the locking discipline.

pub mod types;
pub mod registry;
pub mod loader;

pub use types::*;
pub use registry::*;
pub use loader::*;
