//! Record types and request/response models for the server API
//!
//! This module defines the stored records and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{GradeClass, GradeRecord, NumberRecord};
pub use requests::{AddGradeRequest, AddNumberRequest, GradesQuery};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
