//! compression/oneshot.rs
//! Single-call compress / decompress, with and without a dictionary.
//!
//! Design notes:
//! - Compression allocates exactly `compress_bound` bytes of capacity, lets
//!   the codec set the final length, then gives the unused tail back.
//! - Decompression here only handles frames with a known declared size. The
//!   engine routes unknown-size and multi-frame input to `stream.rs`.
//! - Every buffer is a local `Vec`; an early `?` return drops it.

use zstd_safe::{CCtx, DCtx};

use crate::compression::types::CompressionError;
use crate::constants::ops;
use crate::dictionary::DictionaryEntry;

/// Compress `data` into a single frame at `level`.
pub fn compress(data: &[u8], level: i32) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(zstd_safe::compress_bound(data.len()));
    zstd_safe::compress(&mut out, data, level)
        .map_err(|code| CompressionError::codec(ops::COMPRESS, code))?;
    out.shrink_to_fit();
    Ok(out)
}

/// Compress `data` with the encode handle of `dict`.
///
/// The frame header records the dictionary id (unless the dictionary is raw
/// content) and the exact content size.
pub fn compress_with_dict(data: &[u8], dict: &DictionaryEntry) -> Result<Vec<u8>, CompressionError> {
    let mut cctx = CCtx::try_create().ok_or(CompressionError::Codec {
        op: ops::COMPRESS_WITH_DICT,
        msg: "cannot create compression context".into(),
    })?;

    let mut out = Vec::with_capacity(zstd_safe::compress_bound(data.len()));
    cctx.compress_using_cdict(&mut out, data, dict.cdict())
        .map_err(|code| CompressionError::codec(ops::COMPRESS_WITH_DICT, code))?;
    out.shrink_to_fit();
    Ok(out)
}

/// Decode a single frame whose header declared `declared` bytes.
pub fn decompress_known(frame: &[u8], declared: u64) -> Result<Vec<u8>, CompressionError> {
    let mut out = allocate_output(declared)?;
    let written = zstd_safe::decompress(&mut out, frame)
        .map_err(|code| CompressionError::codec(ops::DECOMPRESS, code))?;
    verify_size(declared, written)?;
    Ok(out)
}

/// Decode a single frame of known size with the decode handle of `dict`.
///
/// The caller is expected to have checked the frame's dictionary id.
pub fn decompress_known_with_dict(
    frame: &[u8],
    declared: u64,
    dict: &DictionaryEntry,
) -> Result<Vec<u8>, CompressionError> {
    let mut dctx = DCtx::try_create().ok_or(CompressionError::Codec {
        op: ops::DECOMPRESS_WITH_DICT,
        msg: "cannot create decompression context".into(),
    })?;

    let mut out = allocate_output(declared)?;
    let written = dctx
        .decompress_using_ddict(&mut out, frame, dict.ddict())
        .map_err(|code| CompressionError::codec(ops::DECOMPRESS_WITH_DICT, code))?;
    verify_size(declared, written)?;
    Ok(out)
}

/// Reserve exactly `declared` bytes, reporting failure instead of aborting.
///
/// Frame headers are untrusted input, so a forged size must not take the
/// process down.
fn allocate_output(declared: u64) -> Result<Vec<u8>, CompressionError> {
    let requested = usize::try_from(declared)
        .map_err(|_| CompressionError::AllocationFailure { requested: declared })?;
    let mut out = Vec::new();
    out.try_reserve_exact(requested)
        .map_err(|_| CompressionError::AllocationFailure { requested: declared })?;
    Ok(out)
}

// The codec already rejects a mismatch when the header carries a size, so
// this only trips on a broken codec build. Still surfaced, never trusted.
fn verify_size(declared: u64, written: usize) -> Result<(), CompressionError> {
    if written as u64 != declared {
        return Err(CompressionError::SizeMismatch { declared, actual: written as u64 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_trims_to_emitted_size() {
        let data = vec![b'a'; 4096];
        let frame = compress(&data, 3).unwrap();
        assert!(frame.len() < zstd_safe::compress_bound(data.len()));
        assert!(frame.len() < 64);
    }

    #[test]
    fn known_size_roundtrip() {
        let frame = compress(b"payload", 3).unwrap();
        assert_eq!(decompress_known(&frame, 7).unwrap(), b"payload");
    }

    #[test]
    fn wrong_declared_size_is_rejected() {
        let frame = compress(b"payload", 3).unwrap();
        // Too small a buffer: the codec refuses to overrun it.
        assert!(decompress_known(&frame, 3).is_err());
    }

    #[test]
    fn absurd_declared_size_is_allocation_failure() {
        let err = allocate_output(u64::MAX).unwrap_err();
        assert!(matches!(err, CompressionError::AllocationFailure { requested: u64::MAX }));
    }

    #[test]
    fn verify_size_reports_both_lengths() {
        match verify_size(10, 4).unwrap_err() {
            CompressionError::SizeMismatch { declared, actual } => {
                assert_eq!(declared, 10);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
