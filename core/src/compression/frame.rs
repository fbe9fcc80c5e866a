//! compression/frame.rs
//! Read-only views over a Zstandard frame header.
//!
//! Design notes:
//! - Nothing here decodes payload; these helpers only answer "how big" and
//!   "which dictionary" so the engine can pick a decode path up front.
//! - Inputs may be several frames back to back; the helpers describe the
//!   first one and `spans_single_frame` tells whether more follow.

use crate::compression::types::{CompressionError, ContentSize};
use crate::constants::{NO_DICT_ID, ZSTD_MAGIC};

/// Declared decompressed size of the first frame in `frame`.
///
/// # Errors
/// - `MalformedFrame` if the header is missing, truncated or not a Zstandard frame.
pub fn content_size(frame: &[u8]) -> Result<ContentSize, CompressionError> {
    match zstd_safe::get_frame_content_size(frame) {
        Ok(Some(size)) => Ok(ContentSize::Known(size)),
        Ok(None) => Ok(ContentSize::Unknown),
        Err(_) => Err(CompressionError::malformed(format!(
            "cannot read content size from {} byte input",
            frame.len()
        ))),
    }
}

/// Dictionary id recorded in the first frame header, `NO_DICT_ID` when absent.
pub fn dict_id(frame: &[u8]) -> u32 {
    zstd_safe::get_dict_id_from_frame(frame).map_or(NO_DICT_ID, |id| id.get())
}

/// Compressed length of the first frame in `frame`.
pub fn first_frame_len(frame: &[u8]) -> Result<usize, CompressionError> {
    zstd_safe::find_frame_compressed_size(frame)
        .map_err(|code| CompressionError::malformed(zstd_safe::get_error_name(code)))
}

/// True when `frame` holds exactly one complete frame.
pub fn spans_single_frame(frame: &[u8]) -> Result<bool, CompressionError> {
    Ok(first_frame_len(frame)? == frame.len())
}

/// Cheap magic-number check; does not validate the rest of the header.
pub fn has_frame_magic(frame: &[u8]) -> bool {
    frame.len() >= ZSTD_MAGIC.len() && frame[..ZSTD_MAGIC.len()] == ZSTD_MAGIC
}

/// Walk every frame in `input` and return the first dictionary id that is not
/// `expected`, or `None` if all frames agree.
///
/// Stops quietly at the first unparsable or truncated frame; the decoder
/// reports those itself. Skippable frames carry no id and are stepped over.
pub fn foreign_dict_id(input: &[u8], expected: u32) -> Option<u32> {
    let mut rest = input;
    while !rest.is_empty() {
        if has_frame_magic(rest) {
            let id = dict_id(rest);
            if id != expected {
                return Some(id);
            }
        }
        match zstd_safe::find_frame_compressed_size(rest) {
            Ok(len) if len > 0 && len <= rest.len() => rest = &rest[len..],
            _ => break,
        }
    }
    None
}
