//! telemetry/snapshot.rs
//! Immutable view of an engine's counters.
//!
//! Design notes:
//! - Plain integers plus one derived ratio; serializable for export.
//! - `compression_ratio` is only meaningful for compress-heavy workloads;
//!   it is computed over all traffic as bytes_out / bytes_in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub compress_calls: u64,
    pub compress_failures: u64,
    pub decompress_calls: u64,
    pub decompress_failures: u64,
    pub streaming_fallbacks: u64,
    pub dictionary_calls: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub compression_ratio: f64,
}

impl TelemetrySnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        compress_calls: u64,
        compress_failures: u64,
        decompress_calls: u64,
        decompress_failures: u64,
        streaming_fallbacks: u64,
        dictionary_calls: u64,
        bytes_in: u64,
        bytes_out: u64,
    ) -> Self {
        let compression_ratio = if bytes_in > 0 {
            bytes_out as f64 / bytes_in as f64
        } else {
            0.0
        };

        Self {
            compress_calls,
            compress_failures,
            decompress_calls,
            decompress_failures,
            streaming_fallbacks,
            dictionary_calls,
            bytes_in,
            bytes_out,
            compression_ratio,
        }
    }

    pub fn total_calls(&self) -> u64 {
        self.compress_calls + self.decompress_calls
    }

    pub fn total_failures(&self) -> u64 {
        self.compress_failures + self.decompress_failures
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
