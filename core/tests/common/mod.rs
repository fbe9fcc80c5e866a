// Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Deterministic JSON-ish records; `family` changes the vocabulary so two
/// families train into different dictionaries.
pub fn sample_records(family: u8, count: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (events, regions): (&[&str], &[&str]) = match family {
        0 => (
            &["login", "logout", "purchase", "refund", "view"],
            &["eu-west-1", "us-east-1", "ap-south-1"],
        ),
        _ => (
            &["sensor_read", "sensor_fault", "calibrate", "heartbeat"],
            &["plant-a", "plant-b", "plant-c", "plant-d"],
        ),
    };

    (0..count)
        .map(|_| {
            let record = format!(
                r#"{{"family":{family},"id":{},"user":"user_{}","event":"{}","region":"{}","ts":{},"score":{}}}"#,
                rng.gen_range(0..1_000_000u32),
                rng.gen_range(0..500u32),
                events[rng.gen_range(0..events.len())],
                regions[rng.gen_range(0..regions.len())],
                1_700_000_000u64 + rng.gen_range(0..10_000_000u64),
                rng.gen_range(0..100u32),
            );
            record.into_bytes()
        })
        .collect()
}

/// Train a real Zstandard dictionary (carries a dictionary id) for `family`.
/// Trained once per family and test binary.
pub fn trained_dictionary(family: u8) -> Vec<u8> {
    static TRAINED: [OnceLock<Vec<u8>>; 2] = [OnceLock::new(), OnceLock::new()];
    let family = family.min(1);
    TRAINED[usize::from(family)]
        .get_or_init(|| {
            let samples = sample_records(family, 2000, 0xD1C7 + u64::from(family));
            zstd::dict::from_samples(&samples, 4096).expect("train dictionary")
        })
        .clone()
}

/// `trained_dictionary(family)` with its header id replaced by `id`.
/// Cheap way to get many distinct, valid dictionaries.
pub fn dictionary_with_id(family: u8, id: u32) -> Vec<u8> {
    let mut source = trained_dictionary(family);
    source[4..8].copy_from_slice(&id.to_le_bytes());
    source
}

/// Dictionary bytes without the Zstandard dictionary magic.
pub fn raw_content(family: u8, seed: u64) -> Vec<u8> {
    sample_records(family, 40, seed).concat()
}

/// One record from `family` not used for training.
pub fn fresh_record(family: u8, seed: u64) -> Vec<u8> {
    sample_records(family, 1, seed).remove(0)
}

/// Compressible payload larger than several streaming chunks.
pub fn large_payload(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let words = ["alpha ", "beta ", "gamma ", "delta ", "epsilon ", "zeta "];
    let mut out = Vec::with_capacity(len + 16);
    while out.len() < len {
        if rng.gen_bool(0.1) {
            out.push(rng.gen::<u8>());
        } else {
            out.extend_from_slice(words[rng.gen_range(0..words.len())].as_bytes());
        }
    }
    out.truncate(len);
    out
}

/// Frame written by a streaming encoder: the header does not declare the size.
pub fn unknown_size_frame(data: &[u8], dict: Option<&[u8]>) -> Vec<u8> {
    let mut encoder = match dict {
        Some(d) => zstd::stream::Encoder::with_dictionary(Vec::new(), 3, d).expect("encoder"),
        None => zstd::stream::Encoder::new(Vec::new(), 3).expect("encoder"),
    };
    encoder.write_all(data).expect("write");
    encoder.finish().expect("finish")
}
