//! Shared helpers for database unit tests

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::db::init_database;

/// Fresh database in a throwaway directory; keep the TempDir alive for the
/// duration of the test.
pub async fn test_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();
    (pool, dir)
}

pub async fn seed_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    sqlx::query("INSERT INTO venues (name, city, state, address) VALUES (?, ?, ?, '1 Main St')")
        .bind(name)
        .bind(city)
        .bind(state)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_artist(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO artists (name, city, state) VALUES (?, 'Portland', 'OR')")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_show(pool: &SqlitePool, artist_id: i64, venue_id: i64, start_time: &str) -> i64 {
    sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(artist_id)
        .bind(venue_id)
        .bind(start_time)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}
