//! telemetry/debug.rs
//! Runtime debug switch and per-call log events.
//!
//! Summary: the switch is flipped at runtime (`Engine::enable_debug`) and read
//! on every call; payload logging is fixed at construction from `LogConfig`.
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::LogConfig;

#[derive(Debug, Default)]
pub struct DebugSwitch {
    enabled: AtomicBool,
    log_payloads: bool,
}

impl DebugSwitch {
    pub fn new(config: &LogConfig) -> Self {
        Self {
            enabled: AtomicBool::new(config.debug),
            log_payloads: config.log_payloads,
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
        tracing::info!("debug logging enabled");
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
        tracing::info!("debug logging disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Emit the per-call size event, and the payload event if opted in.
    pub fn call(&self, op: &'static str, dict: Option<&str>, input: &[u8], output: &[u8]) {
        if !self.is_enabled() {
            return;
        }
        tracing::debug!(op, dict, input_len = input.len(), output_len = output.len(), "call completed");
        if self.log_payloads {
            tracing::trace!(
                op,
                input = %String::from_utf8_lossy(input),
                output = %String::from_utf8_lossy(output),
                "call payloads"
            );
        }
    }
}
