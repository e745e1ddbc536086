//! # Domain
//!
//! The counter's business core: the staged call frame and the entry-point
//! operations over the single stored field.

pub mod frame;
pub mod operations;
