//! compression/stream.rs
//! Incremental decoding for frames whose size is not declared up front.
//!
//! Summary: one decode context, one fixed scratch chunk of the codec's
//! recommended output size, and an accumulator that grows only by what each
//! call actually produced.
//! - The dictionary (if any) is bound to the context before the first call.
//! - Concatenated frames decode back to back through the same context.
//! - Input that stops in the middle of a frame is rejected, not truncated.

use zstd_safe::{DCtx, InBuffer, OutBuffer};

use crate::compression::types::CompressionError;
use crate::constants::ops;
use crate::dictionary::DictionaryEntry;

/// Decode every frame in `frame`, optionally with `dict` bound.
///
/// # Errors
/// - `Codec` if the context cannot be created, the dictionary cannot be bound
///   or any chunk fails to decode.
/// - `MalformedFrame` if the input ends before the last frame is complete.
pub fn stream_decompress(frame: &[u8], dict: Option<&DictionaryEntry>) -> Result<Vec<u8>, CompressionError> {
    let mut dctx = DCtx::try_create().ok_or(CompressionError::Codec {
        op: ops::STREAM_DECOMPRESS,
        msg: "cannot create decompression context".into(),
    })?;
    if let Some(entry) = dict {
        dctx.ref_ddict(entry.ddict())
            .map_err(|code| CompressionError::codec(ops::STREAM_DECOMPRESS, code))?;
    }

    let mut chunk: Vec<u8> = Vec::with_capacity(DCtx::out_size());
    let mut output: Vec<u8> = Vec::new();
    let mut input = InBuffer::around(frame);

    // Hint returned by the last call; 0 means a frame just ended cleanly.
    let mut remaining_hint = 0usize;
    let mut chunk_full = false;

    while input.pos < frame.len() || chunk_full {
        chunk.clear();
        let produced = {
            let mut out = OutBuffer::around(&mut chunk);
            remaining_hint = dctx
                .decompress_stream(&mut out, &mut input)
                .map_err(|code| CompressionError::codec(ops::STREAM_DECOMPRESS, code))?;
            out.pos()
        };

        // A completely filled chunk may leave decoded bytes inside the
        // context; go round once more even if the input is exhausted.
        chunk_full = produced == chunk.capacity();

        if produced > 0 {
            output.reserve_exact(produced);
            output.extend_from_slice(&chunk[..produced]);
        } else if input.pos >= frame.len() {
            break;
        }
    }

    if remaining_hint != 0 {
        return Err(CompressionError::malformed(format!(
            "input ended inside a frame after {} bytes ({} more expected)",
            frame.len(),
            remaining_hint
        )));
    }

    Ok(output)
}
