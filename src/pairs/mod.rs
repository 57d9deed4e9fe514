//! Pairs Module
//!
//! Derives adjacent-id pairs and their sums from stored numbers.

mod aggregator;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use aggregator::{adjacent_pairs, AdjacentPair, AdjacentPairs};
