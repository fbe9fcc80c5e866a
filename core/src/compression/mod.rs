//! compression/mod.rs
//! Zstandard frame primitives used by the engine.
//!
//! Notes:
//! - `oneshot` covers the single-call paths (exact-size buffers).
//! - `stream` covers frames whose size is not declared, and concatenated frames.
//! - `frame` inspects headers so the engine can choose between the two and
//!   verify dictionary ids before decoding anything.

pub mod types;
pub mod frame;
pub mod oneshot;
pub mod stream;

pub use types::*;
pub use oneshot::*;
pub use stream::*;
