//! API Handlers
//!
//! HTTP request handlers for each numbers and grades endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result, StoreResult};
use crate::memo::MemoCache;
use crate::models::{
    AddGradeRequest, AddNumberRequest, GradeRecord, GradesQuery, HealthResponse, NumberRecord,
    StatsResponse,
};
use crate::pairs::{adjacent_pairs, AdjacentPair};
use crate::perf::PerfMonitor;
use crate::store::{RecordStore, SqliteStore};

/// Memo of the pair list, keyed by `[number count, highest id]`.
pub type PairMemo = MemoCache<i64, Vec<AdjacentPair>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record persistence
    pub store: Arc<dyn RecordStore>,
    /// Cached pair lists; the lock is held only while reading or computing
    pub pair_memo: Arc<Mutex<PairMemo>>,
    /// Storage call timing
    pub perf: PerfMonitor,
}

impl AppState {
    /// Creates a new AppState over the given store with timing disabled.
    pub fn new(store: impl RecordStore + 'static, memo_capacity: usize) -> Self {
        Self {
            store: Arc::new(store),
            pair_memo: Arc::new(Mutex::new(MemoCache::new(memo_capacity))),
            perf: PerfMonitor::default(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the SQLite database at the configured path.
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let store = SqliteStore::open(&config.database_path)?;
        let mut state = Self::new(store, config.memo_cache_size);
        state.perf = PerfMonitor::new(config.perf_logging);
        Ok(state)
    }
}

/// Handler for POST /api/numbers
///
/// Stores an integer and returns it with its id.
pub async fn add_number_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddNumberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NumberRecord>)> {
    let Json(req) = payload?;
    let value = req.validate().map_err(ApiError::InvalidRequest)?;

    let record = state
        .perf
        .measure_async("add_number", state.store.add_number(value))
        .await
        .map_err(|e| ApiError::query_failed("Failed to add number", e))?;
    debug!(id = record.id, value = record.value, "Number added");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for GET /api/numbers
///
/// Returns every stored number in id order.
pub async fn list_numbers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<NumberRecord>>> {
    let numbers = state
        .perf
        .measure_async("list_numbers", state.store.list_numbers())
        .await
        .map_err(|e| ApiError::query_failed("Failed to fetch numbers", e))?;

    Ok(Json(numbers))
}

/// Handler for GET /api/numbers/pairs
///
/// Returns the adjacent-id pairs of the stored numbers with their sums.
pub async fn pairs_handler(State(state): State<AppState>) -> Result<Json<Vec<AdjacentPair>>> {
    let numbers = state
        .perf
        .measure_async("list_numbers", state.store.list_numbers())
        .await
        .map_err(|e| ApiError::query_failed("Failed to fetch number pairs", e))?;

    // Numbers are append-only, so count and highest id identify the set
    let deps = [
        numbers.len() as i64,
        numbers.last().map_or(0, |n| n.id),
    ];

    let pairs = {
        let mut memo = state.pair_memo.lock().await;
        state.perf.measure("aggregate_pairs", || {
            memo.get(|| adjacent_pairs(&numbers).collect(), &deps)
        })
    };

    Ok(Json(pairs))
}

/// Handler for POST /api/grades
///
/// Stores a grade for one class and returns it with its id.
pub async fn add_grade_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddGradeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GradeRecord>)> {
    let Json(req) = payload?;
    let (class, value) = req.validate().map_err(ApiError::InvalidRequest)?;

    let record = state
        .perf
        .measure_async("add_grade", state.store.add_grade(class, value))
        .await
        .map_err(|e| ApiError::query_failed("Failed to add grade", e))?;
    debug!(id = record.id, class = %record.class, value = record.value, "Grade added");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for GET /api/grades
///
/// Returns stored grades in id order, filtered by `?class=` when given.
pub async fn list_grades_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<GradesQuery>, QueryRejection>,
) -> Result<Json<Vec<GradeRecord>>> {
    let Query(query) = query?;
    let class = query.class_filter().map_err(ApiError::InvalidRequest)?;

    let grades = state
        .perf
        .measure_async("list_grades", state.store.list_grades(class))
        .await
        .map_err(|e| ApiError::query_failed("Failed to fetch grades", e))?;

    Ok(Json(grades))
}

/// Handler for GET /stats
///
/// Returns counters of the pair list memo.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.pair_memo.lock().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
