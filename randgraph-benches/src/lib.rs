//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and setup errors for the Criterion benchmarks
//! comparing the sparse and dense Erdos-Renyi samplers.

pub mod error;
pub mod params;
