//! # Domain Entities
//!
//! Value-level building blocks of one contract call: the staged write set a
//! successful call commits, and the counter semantics a deployment selects.

use serde::{Deserialize, Serialize};

// =============================================================================
// STORAGE WRITE
// =============================================================================

/// One pending storage write, staged during a call and applied at commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageWrite {
    /// Fixed storage key (part of the on-disk schema).
    pub key: &'static str,
    /// Encoded field value.
    pub value: Vec<u8>,
}

// =============================================================================
// CALL EFFECTS
// =============================================================================

/// Everything a completed operation wants to make visible.
///
/// Nothing in here has touched the host yet: writes are applied and events
/// appended only when the dispatcher commits, and only all together. An
/// aborted call never produces effects.
#[derive(Clone, Debug, Default)]
pub struct CallEffects {
    /// Return buffer for the caller (possibly empty).
    pub output: Vec<u8>,
    /// Staged writes in deterministic (key-sorted) order.
    pub writes: Vec<StorageWrite>,
    /// Buffered event strings, in emission order.
    pub events: Vec<String>,
}

impl CallEffects {
    /// Effects of a pure read: output only, no writes, no events.
    #[must_use]
    pub fn output_only(output: Vec<u8>) -> Self {
        Self {
            output,
            writes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Returns true if committing this would change nothing observable
    /// beyond the return buffer.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty() && self.events.is_empty()
    }
}

// =============================================================================
// COUNTER SEMANTICS
// =============================================================================

/// Behavior of the counter at its range boundaries.
///
/// The two deployed lineages of this contract family disagree here: one
/// treats the counter as a signed value with free range, the other keeps it
/// non-negative and clamps decrements at zero. Both are preserved as an
/// explicit per-deployment choice instead of being silently unified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterSemantics {
    /// Signed free range; steps wrap at the i32 boundary.
    #[default]
    SignedWrapping,
    /// Non-negative range; decrement clamps at zero, increment saturates at
    /// the upper boundary.
    UnsignedSaturating,
}

impl CounterSemantics {
    /// Applies one increment step under these semantics.
    #[must_use]
    pub fn step_up(self, current: i32) -> i32 {
        match self {
            Self::SignedWrapping => current.wrapping_add(1),
            Self::UnsignedSaturating => current.saturating_add(1),
        }
    }

    /// Applies one decrement step under these semantics.
    #[must_use]
    pub fn step_down(self, current: i32) -> i32 {
        match self {
            Self::SignedWrapping => current.wrapping_sub(1),
            Self::UnsignedSaturating => {
                if current > 0 {
                    current - 1
                } else {
                    0
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
