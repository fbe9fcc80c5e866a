//! zdict-core
//!
//! Dictionary-aware Zstandard frame engine.
//! Named, pre-built dictionaries; one-shot and streaming decode; typed errors.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Layers
pub mod dictionary;
pub mod compression;
pub mod telemetry;

// Entry point
pub mod engine;

pub use engine::Engine;
pub use types::{EngineError, EngineResult};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{CompressionError, ContentSize};
    pub use crate::config::{DictionarySource, EngineConfig, LogConfig};
    pub use crate::dictionary::{DictionaryEntry, DictionaryRegistry, RegistryError};
    pub use crate::engine::Engine;
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::{EngineError, EngineResult};
}
