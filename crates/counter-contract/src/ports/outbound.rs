//! # Driven Ports (Outbound)
//!
//! Host collaborators the counter contract depends on. All synchronous:
//! the host guarantees call-level serialization over one contract's
//! storage, and the contract adds no locking of its own.

use crate::errors::StorageError;

/// Host-provided key-to-bytes map, exclusively owned by this contract
/// instance. Key names are the on-disk schema and must stay stable.
pub trait ContractStorage {
    /// Reads the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// `StorageError::Unavailable` when the backend cannot serve the read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Writes `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// `StorageError::Unavailable` when the backend refuses the write.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Returns true if `key` holds a value.
    ///
    /// # Errors
    ///
    /// `StorageError::Unavailable` when the backend cannot serve the read.
    fn has(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Append-only, write-only diagnostic log; the contract never reads it back.
pub trait EventSink {
    /// Appends one event string.
    fn append(&mut self, event: String);
}

/// Platform predicate for the one-time deployment execution window.
pub trait DeploymentOracle {
    /// Returns true while the current call executes in a deployment context.
    fn is_deploying(&self) -> bool;
}
