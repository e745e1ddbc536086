//! # Driving Ports (Inbound)
//!
//! The API this subsystem exposes to its host. Each exported operation
//! receives one opaque byte buffer and returns one opaque byte buffer, or
//! aborts with a diagnostic.

use crate::errors::CallError;

/// Entry-point level contract API.
///
/// One invocation is one atomic unit of work: it either commits every
/// storage write it staged (and its buffered events), or commits none.
pub trait ContractApi {
    /// Dispatches a named entry point with its positional argument buffer.
    ///
    /// # Errors
    ///
    /// Any [`CallError`]; the call leaves no trace in storage or the event
    /// log when it errors.
    fn call(&mut self, entry_point: &str, args: &[u8]) -> Result<Vec<u8>, CallError>;
}
