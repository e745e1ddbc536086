//! # Call Frame
//!
//! Per-call staging layer over contract storage. Operations read through it
//! and write into it; nothing reaches the host until the dispatcher commits
//! a successful call. Reads consult the stage first so an operation sees its
//! own pending writes.

use std::collections::BTreeMap;

use crate::domain::entities::{CallEffects, StorageWrite};
use crate::errors::StorageError;
use crate::ports::outbound::ContractStorage;

/// Staged view of storage for exactly one call.
#[derive(Debug)]
pub struct CallFrame<'a, S: ContractStorage> {
    storage: &'a S,
    // BTreeMap keeps the commit order deterministic.
    staged: BTreeMap<&'static str, Vec<u8>>,
    events: Vec<String>,
}

impl<'a, S: ContractStorage> CallFrame<'a, S> {
    /// Opens a frame over the given storage.
    #[must_use]
    pub fn new(storage: &'a S) -> Self {
        Self {
            storage,
            staged: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Reads `key`, staged writes first, then the backing storage.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the storage port.
    pub fn get(&self, key: &'static str) -> Result<Option<Vec<u8>>, StorageError> {
        if let Some(value) = self.staged.get(key) {
            return Ok(Some(value.clone()));
        }
        self.storage.get(key)
    }

    /// Reads `key` and requires it to exist.
    ///
    /// # Errors
    ///
    /// `StorageError::MissingKey` when neither the stage nor the backing
    /// storage holds the key; backend failures propagate.
    pub fn read(&self, key: &'static str) -> Result<Vec<u8>, StorageError> {
        self.get(key)?.ok_or(StorageError::MissingKey { key })
    }

    /// Returns true if `key` is visible to this call.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the storage port.
    pub fn has(&self, key: &'static str) -> Result<bool, StorageError> {
        if self.staged.contains_key(key) {
            return Ok(true);
        }
        self.storage.has(key)
    }

    /// Stages a write. Later writes to the same key replace earlier ones.
    pub fn put(&mut self, key: &'static str, value: Vec<u8>) {
        self.staged.insert(key, value);
    }

    /// Buffers an event string for emission at commit.
    pub fn emit(&mut self, event: String) {
        self.events.push(event);
    }

    /// Closes the frame into the effects a successful call commits.
    #[must_use]
    pub fn into_effects(self, output: Vec<u8>) -> CallEffects {
        CallEffects {
            output,
            writes: self
                .staged
                .into_iter()
                .map(|(key, value)| StorageWrite { key, value })
                .collect(),
            events: self.events,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
