//! engine.rs
//! Public entry point: dictionary management plus frame compress/decompress.
//!
//! Design notes:
//! - Every operation is synchronous; `Engine` is `Send + Sync` and is meant to
//!   be shared (`&Engine` or `Arc<Engine>`) across caller threads.
//! - Named operations resolve the dictionary once and hold the entry's `Arc`
//!   for the whole call, so `release_all` can run concurrently without pulling
//!   a handle out from under a decode.
//! - Decompression picks its path from the frame header: exact-size single
//!   call when the size is declared and the input is one frame, streaming
//!   otherwise.

use std::path::Path;
use std::sync::Arc;

use crate::compression::{frame, oneshot, stream, CompressionError, ContentSize};
use crate::config::{EngineConfig, LogConfig};
use crate::constants::ops;
use crate::dictionary::{load_dictionary_file, DictionaryEntry, DictionaryRegistry, RegistryError};
use crate::telemetry::{DebugSwitch, EngineCounters, OpKind, TelemetrySnapshot};
use crate::types::EngineResult;

#[derive(Debug)]
pub struct Engine {
    registry: Arc<DictionaryRegistry>,
    level: i32,
    debug: DebugSwitch,
    counters: EngineCounters,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Engine {
    /// Engine with an empty registry sized and leveled from `config`.
    ///
    /// Dictionaries listed in `config` are not loaded; use [`Engine::from_config`].
    pub fn new(config: &EngineConfig) -> Self {
        let registry = DictionaryRegistry::new(config.dictionary_capacity, config.compression_level);
        Self::with_registry(Arc::new(registry), config.compression_level, &config.log)
    }

    /// Engine over an existing (possibly shared) registry.
    pub fn with_registry(registry: Arc<DictionaryRegistry>, level: i32, log: &LogConfig) -> Self {
        Self {
            registry,
            level,
            debug: DebugSwitch::new(log),
            counters: EngineCounters::default(),
        }
    }

    /// Validate `config`, build the engine and register every configured dictionary.
    ///
    /// # Errors
    /// - `Config` if validation fails.
    /// - `Registry` for the first dictionary that cannot be read, decoded or compiled.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let engine = Self::new(config);
        for source in &config.dictionaries {
            engine.add_dictionary_file(&source.name, &source.path)?;
        }
        Ok(engine)
    }

    pub fn registry(&self) -> &Arc<DictionaryRegistry> {
        &self.registry
    }

    pub fn compression_level(&self) -> i32 {
        self.level
    }

    // -----------------------------------------------------------------------
    // Dictionaries
    // -----------------------------------------------------------------------

    /// Compile `source` and register it under `name`.
    pub fn add_dictionary(&self, name: &str, source: &[u8]) -> Result<(), RegistryError> {
        self.registry.add(name, source).map(|_| ())
    }

    /// Load a base64 dictionary file and register it under `name`.
    pub fn add_dictionary_file(&self, name: &str, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let path = path.as_ref();
        tracing::info!(dict = name, path = %path.display(), "adding dictionary from file");
        let source = load_dictionary_file(path)?;
        self.add_dictionary(name, &source)
    }

    /// Drop every registered dictionary; returns how many were released.
    pub fn release_all(&self) -> usize {
        self.registry.release_all()
    }

    // -----------------------------------------------------------------------
    // Debug switch / telemetry
    // -----------------------------------------------------------------------

    pub fn enable_debug(&self) {
        self.debug.enable();
    }

    pub fn disable_debug(&self) {
        self.debug.disable();
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.is_enabled()
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        self.counters.snapshot()
    }

    // -----------------------------------------------------------------------
    // Compress
    // -----------------------------------------------------------------------

    /// Compress `data` into one frame that declares its size.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let result = oneshot::compress(data, self.level);
        self.finish(ops::COMPRESS, OpKind::Compress, None, data, result)
    }

    /// Compress `data` with the dictionary registered as `name`.
    ///
    /// # Errors
    /// - `DictionaryNotFound` before any output is allocated.
    pub fn compress_with_dict(&self, data: &[u8], name: &str) -> Result<Vec<u8>, CompressionError> {
        let result = self
            .resolve(name)
            .and_then(|entry| oneshot::compress_with_dict(data, &entry));
        self.finish(ops::COMPRESS_WITH_DICT, OpKind::Compress, Some(name), data, result)
    }

    // -----------------------------------------------------------------------
    // Decompress
    // -----------------------------------------------------------------------

    /// Decompress a frame written without a dictionary.
    ///
    /// Unknown declared size, or several concatenated frames, go through the
    /// streaming path.
    pub fn decompress(&self, frame: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let result = self.decode(frame, None);
        self.finish(ops::DECOMPRESS, OpKind::Decompress, None, frame, result)
    }

    /// Decompress a frame written with the dictionary registered as `name`.
    ///
    /// # Errors
    /// - `DictionaryNotFound` if `name` is not registered.
    /// - `DictionaryIdMismatch` if the frame was written with another dictionary.
    pub fn decompress_with_dict(&self, frame: &[u8], name: &str) -> Result<Vec<u8>, CompressionError> {
        let result = self
            .resolve(name)
            .and_then(|entry| self.decode(frame, Some(&*entry)));
        self.finish(ops::DECOMPRESS_WITH_DICT, OpKind::Decompress, Some(name), frame, result)
    }

    /// Decode through the streaming path regardless of the declared size.
    pub fn stream_decompress(&self, frame: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let result = verify_dict_id(frame, None).and_then(|()| stream::stream_decompress(frame, None));
        self.finish(ops::STREAM_DECOMPRESS, OpKind::Decompress, None, frame, result)
    }

    /// Streaming decode with the dictionary registered as `name` bound up front.
    ///
    /// Every frame in `frame` must have been written with that dictionary.
    pub fn stream_decompress_with_dict(&self, frame: &[u8], name: &str) -> Result<Vec<u8>, CompressionError> {
        let result = self.resolve(name).and_then(|entry| {
            verify_dict_id(frame, Some(&*entry))?;
            stream::stream_decompress(frame, Some(&*entry))
        });
        self.finish(ops::STREAM_DECOMPRESS, OpKind::Decompress, Some(name), frame, result)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn resolve(&self, name: &str) -> Result<Arc<DictionaryEntry>, CompressionError> {
        self.registry
            .lookup(name)
            .ok_or_else(|| CompressionError::DictionaryNotFound { name: name.to_string() })
    }

    fn decode(&self, frame: &[u8], dict: Option<&DictionaryEntry>) -> Result<Vec<u8>, CompressionError> {
        let size = frame::content_size(frame)?;
        verify_dict_id(frame, dict)?;

        match size {
            ContentSize::Known(declared) if frame::spans_single_frame(frame)? => match dict {
                Some(entry) => oneshot::decompress_known_with_dict(frame, declared, entry),
                None => oneshot::decompress_known(frame, declared),
            },
            _ => {
                self.counters.record_streaming_fallback();
                if self.debug.is_enabled() {
                    tracing::debug!(declared = %size, input_len = frame.len(), "falling back to streaming decode");
                }
                stream::stream_decompress(frame, dict)
            }
        }
    }

    fn finish(
        &self,
        op: &'static str,
        kind: OpKind,
        dict: Option<&str>,
        input: &[u8],
        result: Result<Vec<u8>, CompressionError>,
    ) -> Result<Vec<u8>, CompressionError> {
        match &result {
            Ok(output) => {
                self.counters.record_success(kind, dict.is_some(), input.len(), output.len());
                self.debug.call(op, dict, input, output);
            }
            Err(e) => {
                self.counters.record_failure(kind, dict.is_some());
                tracing::warn!(op, dict, input_len = input.len(), error = %e, "call failed");
            }
        }
        result
    }
}

/// Require every frame's dictionary id to match the one we are about to decode
/// with. Frames written without a dictionary report `NO_DICT_ID`, which no
/// registered dictionary uses.
fn verify_dict_id(frame: &[u8], dict: Option<&DictionaryEntry>) -> Result<(), CompressionError> {
    let expected = dict.map_or(crate::constants::NO_DICT_ID, DictionaryEntry::dict_id);
    match frame::foreign_dict_id(frame, expected) {
        Some(actual) => Err(CompressionError::DictionaryIdMismatch { expected, actual }),
        None => Ok(()),
    }
}
