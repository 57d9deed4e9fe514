//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::memo::DEFAULT_CAPACITY;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Number of pair lists the memoization cache keeps
    pub memo_cache_size: usize,
    /// Log timings of storage calls at debug level
    pub perf_logging: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_PATH` - SQLite file path (default: number_grades.sqlite3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MEMO_CACHE_SIZE` - Pair cache capacity (default: 10)
    /// - `PERF_LOGGING` - Enable storage timings, `true`/`1` (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: env::var("DATABASE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            memo_cache_size: env::var("MEMO_CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.memo_cache_size),
            perf_logging: env::var("PERF_LOGGING")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.perf_logging),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("number_grades.sqlite3"),
            server_port: 3000,
            memo_cache_size: DEFAULT_CAPACITY,
            perf_logging: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
