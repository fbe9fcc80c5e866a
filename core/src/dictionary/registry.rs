//! dictionary/registry.rs
//! Named dictionary registry.
//!
//! Design notes:
//! - Ordered, append-only until `release_all`; names are unique.
//! - Guarded by a reader-writer lock: lookups share the read side, adds and
//!   resets take the write side.
//! - Compilation runs outside the lock; capacity and uniqueness are checked
//!   again under the write lock right before insertion.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_DICTIONARY_CAPACITY};
use crate::dictionary::types::{DictionaryEntry, RegistryError};

#[derive(Debug)]
pub struct DictionaryRegistry {
    entries: RwLock<Vec<Arc<DictionaryEntry>>>,
    capacity: usize,
    level: i32,
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_CAPACITY, DEFAULT_COMPRESSION_LEVEL)
    }
}

impl DictionaryRegistry {
    /// Registry holding at most `capacity` dictionaries whose encode handles
    /// are compiled at `level`.
    pub fn new(capacity: usize, level: i32) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
            level,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().iter().map(|e| e.name().to_string()).collect()
    }

    /// Compile `source` and register it under `name`.
    ///
    /// # Errors
    /// - `CapacityExceeded` when the registry is full; existing entries stay.
    /// - `DuplicateName` when `name` is taken; the existing entry stays.
    /// - Compilation errors from [`DictionaryEntry::compile`].
    pub fn add(&self, name: &str, source: &[u8]) -> Result<Arc<DictionaryEntry>, RegistryError> {
        // Cheap rejections first so a full registry never pays for compilation.
        self.check_insertable(&self.entries.read(), name)?;

        let entry = Arc::new(DictionaryEntry::compile(name, source, self.level)?);

        let mut entries = self.entries.write();
        self.check_insertable(&entries, name)?;
        entries.push(Arc::clone(&entry));

        tracing::info!(
            dict = name,
            dict_id = entry.dict_id(),
            bytes = entry.source_len(),
            registered = entries.len(),
            "dictionary registered"
        );
        Ok(entry)
    }

    /// Exact-name lookup. An empty name never matches.
    pub fn lookup(&self, name: &str) -> Option<Arc<DictionaryEntry>> {
        if name.is_empty() {
            return None;
        }
        self.entries
            .read()
            .iter()
            .find(|e| e.name() == name)
            .map(Arc::clone)
    }

    /// Drop every entry and return how many were released.
    ///
    /// Handles still held by in-flight operations stay alive until those
    /// operations finish; the registry itself is empty afterwards and may be
    /// repopulated.
    pub fn release_all(&self) -> usize {
        let released: Vec<Arc<DictionaryEntry>> = std::mem::take(&mut *self.entries.write());
        for entry in &released {
            tracing::info!(dict = entry.name(), dict_id = entry.dict_id(), "dictionary released");
        }
        released.len()
    }

    fn check_insertable(&self, entries: &[Arc<DictionaryEntry>], name: &str) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName);
        }
        if entries.len() >= self.capacity {
            tracing::warn!(dict = name, capacity = self.capacity, "dictionary capacity exceeded");
            return Err(RegistryError::CapacityExceeded { capacity: self.capacity });
        }
        if entries.iter().any(|e| e.name() == name) {
            return Err(RegistryError::DuplicateName { name: name.to_string() });
        }
        Ok(())
    }
}
