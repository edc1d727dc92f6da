//! Database initialization
//!
//! Opens (creating if needed) the SQLite database and brings the schema up
//! idempotently. Safe to call on every startup.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Referential integrity between shows and venues/artists depends on this
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    // Idempotent schema creation - safe to call multiple times
    create_venues_table(&pool).await?;
    create_artists_table(&pool).await?;
    create_shows_table(&pool).await?;

    Ok(pool)
}

/// Create the venues table
///
/// `genres` holds a JSON array of strings; `name` is UNIQUE so a duplicate
/// listing surfaces as a persistence failure rather than a second row.
async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            facebook_link TEXT,
            image_link TEXT,
            website_link TEXT,
            looking_for_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_location ON venues(state, city)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_name ON venues(name)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the artists table
async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            facebook_link TEXT,
            image_link TEXT,
            website_link TEXT,
            looking_for_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the shows table
///
/// `start_time` is `YYYY-MM-DD HH:MM:SS` UTC text; lexicographic comparison
/// matches chronological order for that layout.
async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            start_time TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("gigbook.db");

        let pool = init_database(&db_path).await.unwrap();
        assert!(db_path.exists());

        // All three tables should exist
        for table in ["venues", "artists", "shows"] {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
            assert_eq!(count, 1, "table {} missing", table);
        }
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("gigbook.db");

        let pool = init_database(&db_path).await.unwrap();
        sqlx::query("INSERT INTO venues (name, city, state, address) VALUES ('A', 'B', 'C', 'D')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        // Second init must not disturb existing data
        let pool = init_database(&db_path).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();

        // No artist 99 or venue 99 exist
        let result = sqlx::query(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (99, 99, '2035-01-01 20:00:00')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
