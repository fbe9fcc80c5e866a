//! dictionary/loader.rs
//! Dictionary sources on disk.
//!
//! Dictionary files are stored base64-encoded (standard alphabet, padding
//! required). Line breaks and other ASCII whitespace are tolerated so wrapped
//! files load the same as single-line ones.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::dictionary::types::RegistryError;

/// Read the exact bytes of `path`.
pub fn read_dictionary_file(path: &Path) -> Result<Vec<u8>, RegistryError> {
    fs::read(path).map_err(|source| RegistryError::Io { path: path.to_path_buf(), source })
}

/// Decode base64 dictionary material read from `path`.
pub fn decode_dictionary(path: &Path, encoded: &[u8]) -> Result<Vec<u8>, RegistryError> {
    let compact: Vec<u8> = encoded
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(&compact)
        .map_err(|source| RegistryError::Base64 { path: path.to_path_buf(), source })
}

/// Read and decode a base64 dictionary file.
pub fn load_dictionary_file(path: &Path) -> Result<Vec<u8>, RegistryError> {
    let encoded = read_dictionary_file(path)?;
    let decoded = decode_dictionary(path, &encoded)?;
    tracing::debug!(path = %path.display(), encoded = encoded.len(), decoded = decoded.len(), "dictionary file loaded");
    Ok(decoded)
}
