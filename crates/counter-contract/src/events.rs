//! # Call Envelopes
//!
//! Serde payloads pairing an entry-point name with its argument buffer, and
//! the response carrying the return buffer or abort diagnostic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inbound contract call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallRequestPayload {
    /// Correlation ID echoed in the response.
    pub correlation_id: Uuid,
    /// Exported entry point name.
    pub entry_point: String,
    /// Positional argument buffer (possibly empty).
    pub args: Vec<u8>,
}

impl CallRequestPayload {
    /// Builds a request with a fresh correlation ID.
    #[must_use]
    pub fn new(entry_point: impl Into<String>, args: Vec<u8>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            entry_point: entry_point.into(),
            args,
        }
    }
}

/// Outcome of one contract call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallResponsePayload {
    /// Correlation ID of the request this answers.
    pub correlation_id: Uuid,
    /// Whether the call committed.
    pub success: bool,
    /// Return buffer (empty on abort).
    pub output: Vec<u8>,
    /// Abort diagnostic (None on success).
    pub abort_reason: Option<String>,
}

impl CallResponsePayload {
    /// Response for a committed call.
    #[must_use]
    pub fn committed(correlation_id: Uuid, output: Vec<u8>) -> Self {
        Self {
            correlation_id,
            success: true,
            output,
            abort_reason: None,
        }
    }

    /// Response for an aborted call.
    #[must_use]
    pub fn aborted(correlation_id: Uuid, reason: impl Into<String>) -> Self {
        Self {
            correlation_id,
            success: false,
            output: Vec::new(),
            abort_reason: Some(reason.into()),
        }
    }
}

/// Exported entry point names; they are the call ABI and must stay stable.
pub mod entry_points {
    /// One-time initialization at deployment.
    pub const INIT: &str = "init";

    /// Add an amount to the counter.
    pub const INCREMENT: &str = "increment";

    /// Subtract an amount from the counter (clamped at zero).
    pub const DECREMENT: &str = "decrement";

    /// Read the counter.
    pub const GET_VALUE: &str = "getValue";

    /// Overwrite the counter.
    pub const RESET: &str = "reset";

    /// Read the counter with a caller-supplied message.
    pub const GET_VALUE_WITH_MESSAGE: &str = "getValueWithMessage";

    /// Stateless multi-argument arithmetic.
    pub const COMPLEX_OPERATION: &str = "complexOperation";

    /// Every exported name.
    pub const ALL: [&str; 7] = [
        INIT,
        INCREMENT,
        DECREMENT,
        GET_VALUE,
        RESET,
        GET_VALUE_WITH_MESSAGE,
        COMPLEX_OPERATION,
    ];
}

// =============================================================================
// TESTS
// =============================================================================
