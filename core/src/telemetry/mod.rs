//! telemetry/mod.rs
//! Debug switch, operation counters, and immutable snapshots.
//!
//! Notes:
//! - Counters are per engine, not global; two engines never share numbers.
//! - Snapshots are plain data and serialize with serde for export.
//! - Log events go through `tracing`; installing a subscriber is the host's job.

pub mod counters;
pub mod debug;
pub mod snapshot;

pub use counters::*;
pub use debug::*;
pub use snapshot::*;
