//! # IronCDR Bench
//!
//! Benchmarking utilities for IronCDR performance testing.

pub mod encoding;
pub mod latency;
