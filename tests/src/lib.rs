//! # Greeter-Chain Test Suite
//!
//! Unified test crate exercising the contract subsystems together:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs   # Deploy-then-call choreography over envelopes
//!     ├── rollback.rs    # Abort flows leave storage and events untouched
//!     ├── variants.rs    # Signed vs clamped counter semantics side by side
//!     └── properties.rs  # Universally-quantified behavior checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p contract-tests
//!
//! # By area
//! cargo test -p contract-tests integration::lifecycle
//! cargo test -p contract-tests integration::properties
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

/// Installs a fmt subscriber so `RUST_LOG=debug cargo test` shows the
/// dispatcher's tracing output. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
