//! API Module
//!
//! HTTP handlers and routing for the numbers and grades REST API.
//!
//! # Endpoints
//! - `POST /api/numbers` - Store an integer
//! - `GET /api/numbers` - List stored integers
//! - `GET /api/numbers/pairs` - List adjacent-id pairs with their sums
//! - `POST /api/grades` - Store a grade
//! - `GET /api/grades` - List grades, optionally `?class=`
//! - `GET /stats` - Pair memo statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
