//! API Routes
//!
//! Configures the Axum router with all server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_grade_handler, add_number_handler, health_handler, list_grades_handler,
    list_numbers_handler, pairs_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin so a separately served front end can call the API
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/numbers",
            get(list_numbers_handler).post(add_number_handler),
        )
        .route("/api/numbers/pairs", get(pairs_handler))
        .route(
            "/api/grades",
            get(list_grades_handler).post(add_grade_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
