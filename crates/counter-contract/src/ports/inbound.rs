//! # Driving Ports (Inbound)
//!
//! The call API this contract exposes to its host.

use crate::errors::CallError;

/// Entry-point level contract API. One invocation commits all of its staged
/// writes and buffered events, or none of them.
pub trait ContractApi {
    /// Dispatches a named entry point with its positional argument buffer.
    ///
    /// # Errors
    ///
    /// Any [`CallError`]; an erroring call leaves storage and the event log
    /// untouched.
    fn call(&mut self, entry_point: &str, args: &[u8]) -> Result<Vec<u8>, CallError>;
}
