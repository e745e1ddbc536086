//! # Call Envelopes
//!
//! Transport payloads for one contract call: the request pairing an entry
//! point name with its argument buffer, and the response carrying the return
//! buffer or the abort diagnostic. Correlation IDs tie the two together
//! across whatever transport the host uses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// REQUEST / RESPONSE PAYLOADS
// =============================================================================

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

    /// Response for an aborted call. No return bytes are produced.
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

// =============================================================================
// ENTRY POINT NAMES
// =============================================================================

/// Exported entry point names. These are the contract's call ABI and must
/// stay stable.
pub mod entry_points {
    /// One-time initialization at deployment.
    pub const CONSTRUCTOR: &str = "constructor";

    /// Read the greeting.
    pub const GREET: &str = "greet";

    /// Overwrite the greeting.
    pub const SET_GREETING: &str = "setGreeting";

    /// Read the value.
    pub const GET_VALUE: &str = "getValue";

    /// Overwrite the value.
    pub const SET_VALUE: &str = "setValue";

    /// Read the counter.
    pub const GET_COUNTER: &str = "getCounter";

    /// Step the counter up.
    pub const INCREMENT: &str = "increment";

    /// Step the counter down.
    pub const DECREMENT: &str = "decrement";

    /// Every exported name.
    pub const ALL: [&str; 8] = [
        CONSTRUCTOR,
        GREET,
        SET_GREETING,
        GET_VALUE,
        SET_VALUE,
        GET_COUNTER,
        INCREMENT,
        DECREMENT,
    ];
}

// =============================================================================
// TESTS
// =============================================================================
