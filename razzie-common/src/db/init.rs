//! Database initialization and schema bootstrap

use crate::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open (creating if needed) the database and bootstrap the schema
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL allows concurrent readers alongside one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create tables if needed. Idempotent; also used by tests that run
/// against in-memory pools.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;
    create_movies_table(pool).await?;
    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("INSERT OR IGNORE INTO schema_version (version) VALUES (1)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_movies_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            title TEXT NOT NULL,
            studios TEXT,
            producers TEXT,
            winner TEXT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_database_and_schema() {
        let dir = TempDir::new().expect("temp dir");
        let db_path = dir.path().join("razzie.db");

        let pool = init_database(&db_path).await.expect("init should succeed");
        assert!(db_path.exists());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&pool)
            .await
            .expect("movies table should exist");
        assert_eq!(count, 0);

        let version: i64 = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
            .fetch_one(&pool)
            .await
            .expect("schema_version table should exist");
        assert_eq!(version, 1);
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let db_path = dir.path().join("razzie.db");

        let pool = init_database(&db_path).await.expect("first init");
        sqlx::query("INSERT INTO movies (year, title, winner) VALUES (1990, 'Ghosts Can''t Do It', 'yes')")
            .execute(&pool)
            .await
            .expect("insert");
        pool.close().await;

        let pool = init_database(&db_path).await.expect("second init");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 1, "re-init must not drop existing rows");
    }
}
