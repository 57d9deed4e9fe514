//! Number Grades - A small numbers and grades REST service
//!
//! Stores integers and class grades in SQLite, serves adjacent-id pairs of the
//! stored integers, and memoizes the pair list with a bounded FIFO cache.

pub mod api;
pub mod config;
pub mod error;
pub mod memo;
pub mod models;
pub mod pairs;
pub mod perf;
pub mod store;
pub mod validation;

pub use api::AppState;
pub use config::Config;
