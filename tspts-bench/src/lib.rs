//! # tspts Bench
//!
//! Benchmarking utilities for tspts performance testing.

pub mod fixtures;
