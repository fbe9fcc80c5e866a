//! telemetry/counters.rs
//! Per-engine operation counters.
//!
//! Summary: relaxed atomics bumped once per call; converted into an immutable
//! `TelemetrySnapshot` on demand. Counters never influence control flow, so
//! no ordering stronger than `Relaxed` is needed.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::telemetry::snapshot::TelemetrySnapshot;

/// Operation families tracked separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Compress,
    Decompress,
}

#[derive(Debug, Default)]
pub struct EngineCounters {
    compress_calls: AtomicU64,
    compress_failures: AtomicU64,
    decompress_calls: AtomicU64,
    decompress_failures: AtomicU64,
    streaming_fallbacks: AtomicU64,
    dictionary_calls: AtomicU64,
    bytes_in: AtomicU64,
    bytes_out: AtomicU64,
}

impl EngineCounters {
    /// Record one successful call that read `input` bytes and returned `output` bytes.
    pub fn record_success(&self, kind: OpKind, with_dict: bool, input: usize, output: usize) {
        self.calls(kind).fetch_add(1, Ordering::Relaxed);
        if with_dict {
            self.dictionary_calls.fetch_add(1, Ordering::Relaxed);
        }
        self.bytes_in.fetch_add(input as u64, Ordering::Relaxed);
        self.bytes_out.fetch_add(output as u64, Ordering::Relaxed);
    }

    /// Record one failed call. Failed calls still count as calls.
    pub fn record_failure(&self, kind: OpKind, with_dict: bool) {
        self.calls(kind).fetch_add(1, Ordering::Relaxed);
        if with_dict {
            self.dictionary_calls.fetch_add(1, Ordering::Relaxed);
        }
        let failures = match kind {
            OpKind::Compress => &self.compress_failures,
            OpKind::Decompress => &self.decompress_failures,
        };
        failures.fetch_add(1, Ordering::Relaxed);
    }

    /// A one-shot decompress handed the frame to the streaming path.
    pub fn record_streaming_fallback(&self) {
        self.streaming_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        TelemetrySnapshot::new(
            load(&self.compress_calls),
            load(&self.compress_failures),
            load(&self.decompress_calls),
            load(&self.decompress_failures),
            load(&self.streaming_fallbacks),
            load(&self.dictionary_calls),
            load(&self.bytes_in),
            load(&self.bytes_out),
        )
    }

    fn calls(&self, kind: OpKind) -> &AtomicU64 {
        match kind {
            OpKind::Compress => &self.compress_calls,
            OpKind::Decompress => &self.decompress_calls,
        }
    }
}
