//! # Error Types
//!
//! Call failure taxonomy for the counter contract. Any error aborts the
//! whole call with nothing committed.

use contract_abi::ArgsError;
use thiserror::Error;

/// Errors from contract storage access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A read hit a key the deployment entry point has not written yet.
    #[error("read of uninitialized storage key: {key}")]
    MissingKey {
        /// The key that was read.
        key: &'static str,
    },

    /// The stored counter no longer decodes as a u32.
    #[error("stored field under key {key} is not a valid u32")]
    Corrupted {
        /// The key whose value is undecodable.
        key: &'static str,
    },

    /// The storage backend refused the operation.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a contract call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The argument buffer could not be decoded.
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// Contract storage failed or held an invalid field.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// `init` ran outside a deployment context, or ran twice.
    #[error("precondition violation: {reason}")]
    PreconditionViolation {
        /// Which precondition failed.
        reason: String,
    },

    /// The call named an entry point the contract does not export.
    #[error("unknown entry point: {name}")]
    UnknownEntryPoint {
        /// The name the caller asked for.
        name: String,
    },
}

impl CallError {
    /// Returns true for the deployment-precondition failures.
    #[must_use]
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation { .. })
    }

    /// Returns true when the argument buffer was too short.
    #[must_use]
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::Args(ArgsError::MissingArgument { .. }))
    }
}

// =============================================================================
// TESTS
// =============================================================================
