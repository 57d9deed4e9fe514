//! Memo Module
//!
//! Bounded memoization with a shallow dependency check and FIFO eviction.

mod cache;
mod order;
mod stats;


// Re-export public types
pub use cache::{dependency_key, MemoCache};
pub use order::InsertionOrder;
pub use stats::MemoStats;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 10;
