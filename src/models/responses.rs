//! Response DTOs for the server API
//!
//! Defines the structure of outgoing HTTP response bodies. Records and pairs
//! are serialized directly; these cover the service and error endpoints.

use serde::Serialize;

use crate::memo::MemoStats;

/// Response body for the stats endpoint (GET /stats)
///
/// Counters of the memo cache in front of the pair list.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Calls answered from the cache
    pub hits: u64,
    /// Calls that recomputed the pair list
    pub computations: u64,
    /// Entries evicted to respect the capacity
    pub evictions: u64,
    /// Current number of cached pair lists
    pub total_entries: usize,
    /// Maximum number of cached pair lists
    pub capacity: usize,
    /// Hit rate (hits / (hits + computations))
    pub hit_rate: f64,
}

impl From<MemoStats> for StatsResponse {
    fn from(stats: MemoStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            computations: stats.computations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
