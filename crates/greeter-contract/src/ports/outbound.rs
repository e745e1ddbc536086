//! # Driven Ports (Outbound)
//!
//! Interfaces the contract depends on. The host runtime implements these;
//! in-memory adapters exist for tests and harnesses.
//!
//! The host serializes all calls touching one contract's storage, so every
//! port is synchronous and mutation goes through `&mut self`. The contract
//! must not layer its own locking on top of that guarantee.

use crate::errors::StorageError;

// =============================================================================
// CONTRACT STORAGE
// =============================================================================

/// Host-provided key-to-bytes map, exclusively owned by one contract
/// instance and persisted across calls.
///
/// Key names are the on-disk schema: they are fixed constants and must stay
/// stable across contract upgrades.
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

// =============================================================================
// EVENT SINK
// =============================================================================

/// Append-only, ordered diagnostic log external to the contract.
///
/// The contract only ever appends human-readable strings here as a side
/// effect of committed calls; it never reads them back.
pub trait EventSink {
    /// Appends one event string to the log.
    fn append(&mut self, event: String);
}

// =============================================================================
// DEPLOYMENT ORACLE
// =============================================================================

/// Platform predicate distinguishing the one-time deployment execution
/// window from ordinary calls.
///
/// The constructor consults this before touching storage; it is the host's
/// answer, not something the contract can derive on its own.
pub trait DeploymentOracle {
    /// Returns true while the current call executes in a deployment context.
    fn is_deploying(&self) -> bool;
}

// =============================================================================
// TESTS
// =============================================================================
