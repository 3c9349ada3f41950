//! Durable game history, one row per completed round.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::statistics::{GameRecord, RecordStore};

/// Append a completed round to the history table.
pub async fn append_record(pool: &SqlitePool, record: &GameRecord) -> Result<()> {
    let recorded_at = record.date.to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO game_records (correct, total, recorded_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(record.correct as i64)
    .bind(record.total as i64)
    .bind(recorded_at)
    .execute(pool)
    .await
    .context("Failed to append game record")?;

    Ok(())
}

/// Load the full history in recording order.
pub async fn load_records(pool: &SqlitePool) -> Result<Vec<GameRecord>> {
    let rows = sqlx::query(
        r#"
        SELECT correct, total, recorded_at
        FROM game_records
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to load game records")?;

    let records = rows
        .into_iter()
        .map(|row| {
            let date = DateTime::parse_from_rfc3339(&row.get::<String, _>("recorded_at"))
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());

            GameRecord {
                correct: row.get::<i64, _>("correct") as u32,
                total: row.get::<i64, _>("total") as u32,
                date,
            }
        })
        .collect();

    Ok(records)
}

/// [`RecordStore`] over the sqlite pool. Callers are synchronous (the UI
/// event loop), so each operation hops onto the tokio runtime the way the
/// rest of the app does.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Execute an async database operation from sync context.
    fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}

impl RecordStore for SqliteRecordStore {
    fn append(&self, record: &GameRecord) -> Result<()> {
        self.run_db_operation(append_record(&self.pool, record))
    }

    fn read_all(&self) -> Result<Vec<GameRecord>> {
        self.run_db_operation(load_records(&self.pool))
    }
}
