//! dictionary/types.rs
//! Compiled dictionary entries and registry errors.
//!
//! Design notes:
//! - An entry always carries both compiled forms; there is no way to build one
//!   without the other.
//! - Entries are immutable and handed out as `Arc<DictionaryEntry>`, so a
//!   registry reset never frees a handle an in-flight call still holds.
//! - Only formatted dictionaries with a non-zero id are accepted. Frames
//!   written with one carry that id, which is what the decode side checks.

use std::fmt;
use std::path::PathBuf;

use zstd_safe::{CDict, DDict};

use crate::constants::ZSTD_DICT_MAGIC;

/// Which compiled form of a dictionary a failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleKind {
    Encode,
    Decode,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Encode => f.write_str("encode"),
            HandleKind::Decode => f.write_str("decode"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("dictionary capacity exceeded: registry is limited to {capacity} entries")]
    CapacityExceeded { capacity: usize },

    #[error("dictionary {name:?} is already registered")]
    DuplicateName { name: String },

    #[error("dictionary name must not be empty")]
    InvalidName,

    #[error("dictionary {name:?} has no content")]
    EmptyDictionary { name: String },

    #[error("dictionary {name:?} carries no dictionary id; raw content cannot be verified at decode time")]
    MissingDictionaryId { name: String },

    #[error("failed to compile {handle} handle for dictionary {name:?}")]
    DictionaryInit { name: String, handle: HandleKind },

    #[error("cannot read dictionary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary file {} is not valid base64: {source}", path.display())]
    Base64 {
        path: PathBuf,
        #[source]
        source: base64::DecodeError,
    },
}

/// A named dictionary compiled for both directions.
pub struct DictionaryEntry {
    name: String,
    level: i32,
    dict_id: u32,
    source_len: usize,
    encode: CDict<'static>,
    decode: DDict<'static>,
}

impl DictionaryEntry {
    /// Compile `source` into encode (at `level`) and decode handles.
    ///
    /// # Errors
    /// - `InvalidName` / `EmptyDictionary` for empty inputs.
    /// - `MissingDictionaryId` for raw content or a formatted dictionary with id 0.
    /// - `DictionaryInit` if the codec refuses to build either handle.
    pub fn compile(name: &str, source: &[u8], level: i32) -> Result<Self, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName);
        }
        if source.is_empty() {
            return Err(RegistryError::EmptyDictionary { name: name.to_string() });
        }
        if !has_dictionary_magic(source) {
            return Err(RegistryError::MissingDictionaryId { name: name.to_string() });
        }

        let encode = CDict::try_create(source, level).ok_or_else(|| RegistryError::DictionaryInit {
            name: name.to_string(),
            handle: HandleKind::Encode,
        })?;
        let decode = DDict::try_create(source).ok_or_else(|| RegistryError::DictionaryInit {
            name: name.to_string(),
            handle: HandleKind::Decode,
        })?;

        let dict_id = decode
            .get_dict_id()
            .map(|id| id.get())
            .ok_or_else(|| RegistryError::MissingDictionaryId { name: name.to_string() })?;

        Ok(Self {
            name: name.to_string(),
            level,
            dict_id,
            source_len: source.len(),
            encode,
            decode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level the encode handle was compiled at.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Identifier embedded in frames written with this dictionary. Never `NO_DICT_ID`.
    pub fn dict_id(&self) -> u32 {
        self.dict_id
    }

    /// Size in bytes of the decoded dictionary material.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn cdict(&self) -> &CDict<'static> {
        &self.encode
    }

    pub fn ddict(&self) -> &DDict<'static> {
        &self.decode
    }
}

impl fmt::Debug for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryEntry")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("dict_id", &self.dict_id)
            .field("source_len", &self.source_len)
            .finish_non_exhaustive()
    }
}

/// True when `source` starts with the Zstandard dictionary magic, i.e. it was
/// produced by a trainer rather than being raw content.
pub fn has_dictionary_magic(source: &[u8]) -> bool {
    source.len() >= ZSTD_DICT_MAGIC.len() && source[..ZSTD_DICT_MAGIC.len()] == ZSTD_DICT_MAGIC
}
