//! Database access layer for filmdex-web
//!
//! The catalog is opened read-only: the service never writes, the file is
//! produced ahead of time from the open source film database repository.

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

pub mod film_types;
pub mod films;

/// Connect to the catalog with read-only mode.
///
/// Uses SQLite mode=ro so no write can reach the file, plus immutable=1
/// since nothing else writes to it while the service runs.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Catalog database not found: {}\nImport the film database first.",
            db_path.display()
        );
    }

    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to catalog in read-only mode")?;

    Ok(pool)
}

/// Count the films in the catalog. Done once at startup; the catalog does
/// not change while the service runs.
pub async fn count_films(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM films")
        .fetch_one(pool)
        .await
        .context("Failed to count films")?;
    Ok(count)
}
