//! SQLite Store Module
//!
//! RecordStore backed by a single rusqlite connection. Queries run on the
//! blocking thread pool so handlers never block the async runtime.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, Row, ToSql};
use tokio::task;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{GradeClass, GradeRecord, NumberRecord};
use crate::store::RecordStore;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS numbers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    value INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS grades (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class TEXT NOT NULL CHECK (class IN ('Math', 'Science', 'History')),
    value INTEGER NOT NULL CHECK (value BETWEEN 0 AND 100)
);

CREATE INDEX IF NOT EXISTS idx_grades_class ON grades(class);
"#;

impl ToSql for GradeClass {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for GradeClass {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|err: String| FromSqlError::Other(err.into()))
    }
}

fn number_from_row(row: &Row<'_>) -> rusqlite::Result<NumberRecord> {
    Ok(NumberRecord {
        id: row.get(0)?,
        value: row.get(1)?,
    })
}

fn grade_from_row(row: &Row<'_>) -> rusqlite::Result<GradeRecord> {
    Ok(GradeRecord {
        id: row.get(0)?,
        class: row.get(1)?,
        value: row.get(2)?,
    })
}

// == SQLite Store ==
/// Record store over one shared SQLite connection.
///
/// `Connection` is not `Sync`, so it lives behind a `Mutex`; clones share it.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    // == Constructors ==
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        debug!("Opening SQLite database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // == With Connection ==
    /// Runs `f` against the connection on the blocking pool.
    ///
    /// The lock is held only for the duration of `f`.
    async fn with_conn<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        task::spawn_blocking(move || -> StoreResult<R> {
            let guard = conn.lock().map_err(|_| StoreError::LockPoisoned)?;
            Ok(f(&guard)?)
        })
        .await?
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn add_number(&self, value: i32) -> StoreResult<NumberRecord> {
        self.with_conn(move |conn| {
            conn.query_row(
                "INSERT INTO numbers (value) VALUES (?1) RETURNING id, value",
                params![value],
                number_from_row,
            )
        })
        .await
    }

    async fn list_numbers(&self) -> StoreResult<Vec<NumberRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, value FROM numbers ORDER BY id ASC")?;
            let rows = stmt.query_map([], number_from_row)?;
            rows.collect()
        })
        .await
    }

    async fn add_grade(&self, class: GradeClass, value: i32) -> StoreResult<GradeRecord> {
        self.with_conn(move |conn| {
            conn.query_row(
                "INSERT INTO grades (class, value) VALUES (?1, ?2) RETURNING id, class, value",
                params![class, value],
                grade_from_row,
            )
        })
        .await
    }

    async fn list_grades(&self, class: Option<GradeClass>) -> StoreResult<Vec<GradeRecord>> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, class, value FROM grades
                 WHERE (?1 IS NULL OR class = ?1)
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(params![class], grade_from_row)?;
            rows.collect()
        })
        .await
    }
}
