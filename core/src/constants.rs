//! constants.rs
//! Codec-wide defaults shared by the registry, the engine and the config layer.

/// Default Zstandard level for one-shot compression and for compiled
/// encode-side dictionaries.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Default number of named dictionaries a registry accepts.
pub const DEFAULT_DICTIONARY_CAPACITY: usize = 10;

/// Dictionary id reported for frames written without a dictionary.
/// Registered dictionaries never carry it.
pub const NO_DICT_ID: u32 = 0;

/// Zstandard frame magic number, little-endian on the wire.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Zstandard dictionary magic number, little-endian on the wire.
/// Sources without this prefix carry no id and are refused by the registry.
pub const ZSTD_DICT_MAGIC: [u8; 4] = [0x37, 0xA4, 0x30, 0xEC];

/// Operation labels used in log events, errors and telemetry.
pub mod ops {
    pub const COMPRESS: &str = "compress";
    pub const COMPRESS_WITH_DICT: &str = "compress_with_dict";
    pub const DECOMPRESS: &str = "decompress";
    pub const DECOMPRESS_WITH_DICT: &str = "decompress_with_dict";
    pub const STREAM_DECOMPRESS: &str = "stream_decompress";
}
