//! # Ports
//!
//! Boundaries of the counter subsystem. Contract crates define their own
//! ports rather than sharing them, so each deployable unit stays decoupled.

pub mod inbound;
pub mod outbound;
