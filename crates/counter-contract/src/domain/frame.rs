//! # Call Frame
//!
//! Staging layer for exactly one call: reads fall through to storage,
//! writes and events stay buffered until the dispatcher commits a
//! successful call.

use std::collections::BTreeMap;

use crate::errors::StorageError;
use crate::ports::outbound::ContractStorage;

/// One pending storage write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageWrite {
    /// Fixed storage key.
    pub key: &'static str,
    /// Encoded field value.
    pub value: Vec<u8>,
}

/// Output, writes, and events of one completed operation, not yet visible
/// to the host.
#[derive(Clone, Debug, Default)]
pub struct CallEffects {
    /// Return buffer for the caller.
    pub output: Vec<u8>,
    /// Staged writes in deterministic key order.
    pub writes: Vec<StorageWrite>,
    /// Buffered event strings.
    pub events: Vec<String>,
}

/// Staged storage view for one call.
#[derive(Debug)]
pub struct CallFrame<'a, S: ContractStorage> {
    storage: &'a S,
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

    /// Reads `key` and requires it to exist, staged writes first.
    ///
    /// # Errors
    ///
    /// `StorageError::MissingKey` when the key is nowhere visible; backend
    /// failures propagate.
    pub fn read(&self, key: &'static str) -> Result<Vec<u8>, StorageError> {
        if let Some(value) = self.staged.get(key) {
            return Ok(value.clone());
        }
        self.storage
            .get(key)?
            .ok_or(StorageError::MissingKey { key })
    }

    /// Returns true if `key` is visible to this call.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn has(&self, key: &'static str) -> Result<bool, StorageError> {
        if self.staged.contains_key(key) {
            return Ok(true);
        }
        self.storage.has(key)
    }

    /// Stages a write.
    pub fn put(&mut self, key: &'static str, value: Vec<u8>) {
        self.staged.insert(key, value);
    }

    /// Buffers an event for emission at commit.
    pub fn emit(&mut self, event: String) {
        self.events.push(event);
    }

    /// Closes the frame into committable effects.
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
