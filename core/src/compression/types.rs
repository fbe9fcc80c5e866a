//! compression/types.rs
//! Frame-level error taxonomy and header views.
use std::fmt;

/// Decompressed size as declared by a frame header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContentSize {
    Known(u64),
    /// The writer did not know the size up front (streaming encoders).
    Unknown,
}

impl fmt::Display for ContentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSize::Known(n) => write!(f, "{n}"),
            ContentSize::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("dictionary {name:?} is not registered")]
    DictionaryNotFound { name: String },

    #[error("dictionary id mismatch: expected {expected} got {actual}")]
    DictionaryIdMismatch { expected: u32, actual: u32 },

    #[error("malformed frame: {reason}")]
    MalformedFrame { reason: String },

    #[error("decoded size {actual} != declared size {declared}")]
    SizeMismatch { declared: u64, actual: u64 },

    #[error("codec {op} failed: {msg}")]
    Codec { op: &'static str, msg: String },

    #[error("cannot allocate {requested} bytes for decoded output")]
    AllocationFailure { requested: u64 },
}

impl CompressionError {
    /// Wrap a raw Zstandard error code.
    pub(crate) fn codec(op: &'static str, code: zstd_safe::ErrorCode) -> Self {
        CompressionError::Codec { op, msg: zstd_safe::get_error_name(code).to_string() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CompressionError::MalformedFrame { reason: reason.into() }
    }
}
