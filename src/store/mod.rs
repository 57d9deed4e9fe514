//! Store Module
//!
//! Persistence of number and grade records.

mod sqlite;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{GradeClass, GradeRecord, NumberRecord};

pub use sqlite::SqliteStore;

// == Record Store ==
/// Storage backend used by the HTTP handlers.
///
/// Listings are ordered by ascending id. Records are never updated or deleted.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a number and returns it with its assigned id.
    async fn add_number(&self, value: i32) -> StoreResult<NumberRecord>;

    /// Returns every stored number.
    async fn list_numbers(&self) -> StoreResult<Vec<NumberRecord>>;

    /// Inserts a grade and returns it with its assigned id.
    async fn add_grade(&self, class: GradeClass, value: i32) -> StoreResult<GradeRecord>;

    /// Returns stored grades, optionally only those of one class.
    async fn list_grades(&self, class: Option<GradeClass>) -> StoreResult<Vec<GradeRecord>>;
}
