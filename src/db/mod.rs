pub mod records;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Platform-specific data directory for the app, created on first use.
pub fn data_dir() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push("movie-quiz");

    std::fs::create_dir_all(&path).context("Failed to create movie-quiz data directory")?;

    Ok(path)
}

/// Path to the game history database.
pub fn get_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("history.db"))
}

/// Create a connection pool to the SQLite database at the default location.
pub async fn create_pool() -> Result<SqlitePool> {
    create_pool_at(&get_db_path()?).await
}

/// Create a connection pool to the SQLite database at `db_path`.
pub async fn create_pool_at(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool).await?;

    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS game_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            correct INTEGER NOT NULL,
            total INTEGER NOT NULL,
            recorded_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to initialize database schema")?;

    Ok(())
}
