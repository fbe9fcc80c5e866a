mod common;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use zdict_core::{
        compression::{frame, CompressionError, ContentSize},
        config::EngineConfig,
        Engine,
    };

    use crate::common::{large_payload, unknown_size_frame};

    // --- One-shot round trips ---

    #[test]
    fn roundtrip_small_payload() {
        let engine = Engine::default();
        let frame = engine.compress(b"hello hello hello hello").unwrap();
        assert_eq!(engine.decompress(&frame).unwrap(), b"hello hello hello hello");
    }

    #[test]
    fn empty_input_roundtrips_to_empty_output() {
        let engine = Engine::default();
        let frame = engine.compress(&[]).unwrap();
        assert!(!frame.is_empty(), "an empty payload still produces a frame header");
        assert_eq!(frame::content_size(&frame).unwrap(), ContentSize::Known(0));

        let out = engine.decompress(&frame).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn compressed_frame_declares_its_size() {
        let engine = Engine::default();
        let data = large_payload(10_000);
        let frame = engine.compress(&data).unwrap();
        assert_eq!(frame::content_size(&frame).unwrap(), ContentSize::Known(10_000));
        assert!(frame.len() < data.len());
    }

    #[test]
    fn level_from_config_is_used() {
        let data = large_payload(200_000);
        let fast = Engine::new(&EngineConfig { compression_level: 1, ..EngineConfig::default() });
        let strong = Engine::new(&EngineConfig { compression_level: 19, ..EngineConfig::default() });
        assert_eq!(strong.compression_level(), 19);

        let a = fast.compress(&data).unwrap();
        let b = strong.compress(&data).unwrap();
        assert!(b.len() <= a.len());
        assert_eq!(fast.decompress(&b).unwrap(), data);
        assert_eq!(strong.decompress(&a).unwrap(), data);
    }

    // --- Malformed input ---

    #[test]
    fn empty_frame_is_malformed() {
        let engine = Engine::default();
        let err = engine.decompress(&[]).unwrap_err();
        assert!(matches!(err, CompressionError::MalformedFrame { .. }));
    }

    #[test]
    fn garbage_is_malformed() {
        let engine = Engine::default();
        let err = engine.decompress(b"this is plain text, not a frame").unwrap_err();
        assert!(matches!(err, CompressionError::MalformedFrame { .. }));
    }

    #[test]
    fn truncated_known_size_frame_fails() {
        let engine = Engine::default();
        let frame = engine.compress(&large_payload(50_000)).unwrap();
        let cut = &frame[..frame.len() / 2];
        assert!(engine.decompress(cut).is_err());
    }

    #[test]
    fn corrupted_payload_is_reported_not_returned() {
        let engine = Engine::default();
        let data = large_payload(20_000);
        let mut frame = engine.compress(&data).unwrap();
        let mid = frame.len() / 2;
        for b in &mut frame[mid..mid + 8] {
            *b ^= 0xFF;
        }
        match engine.decompress(&frame) {
            Ok(out) => assert_ne!(out, data, "corruption must never round-trip silently"),
            Err(e) => assert!(matches!(
                e,
                CompressionError::Codec { .. }
                    | CompressionError::MalformedFrame { .. }
                    | CompressionError::SizeMismatch { .. }
            )),
        }
    }

    // --- Unknown size / multi-frame fallbacks ---

    #[test]
    fn unknown_size_frame_falls_back_to_streaming() {
        let engine = Engine::default();
        let data = large_payload(300_000);
        let frame = unknown_size_frame(&data, None);
        assert_eq!(frame::content_size(&frame).unwrap(), ContentSize::Unknown);

        assert_eq!(engine.decompress(&frame).unwrap(), data);
        assert_eq!(engine.telemetry().streaming_fallbacks, 1);
    }

    #[test]
    fn concatenated_frames_decode_in_order() {
        let engine = Engine::default();
        let mut frames = engine.compress(b"first frame / ").unwrap();
        frames.extend_from_slice(&engine.compress(b"second frame").unwrap());

        assert_eq!(engine.decompress(&frames).unwrap(), b"first frame / second frame");
    }

    #[test]
    fn frame_requiring_dictionary_is_rejected_without_one() {
        let dict = crate::common::trained_dictionary(0);
        let engine = Engine::default();
        engine.add_dictionary("events", &dict).unwrap();
        let frame = engine.compress_with_dict(&crate::common::fresh_record(0, 9), "events").unwrap();

        let err = engine.decompress(&frame).unwrap_err();
        assert!(matches!(err, CompressionError::DictionaryIdMismatch { expected: 0, .. }));
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
            let engine = Engine::default();
            let frame = engine.compress(&data).unwrap();
            prop_assert_eq!(engine.decompress(&frame).unwrap(), data);
        }

        #[test]
        fn prop_streaming_matches_oneshot(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
            let engine = Engine::default();
            let frame = engine.compress(&data).unwrap();
            prop_assert_eq!(engine.stream_decompress(&frame).unwrap(), engine.decompress(&frame).unwrap());
        }
    }
}
