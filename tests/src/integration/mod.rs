//! # Integration Tests
//!
//! Cross-crate choreography: whole call lifecycles through the dispatcher
//! envelopes, per-variant semantics comparisons, and abort/rollback flows.

pub mod lifecycle;
pub mod properties;
pub mod rollback;
pub mod variants;
