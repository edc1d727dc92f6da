//! Show queries
//!
//! Shows are join records: create and list only, no update or delete path.

use sqlx::SqlitePool;

use crate::db::models::{ShowInput, ShowListingRow};
use crate::error::Result;
use crate::time::format_timestamp;

/// All shows ordered by start time ascending, joined with both counterparts
pub async fn list(db: &SqlitePool) -> Result<Vec<ShowListingRow>> {
    let rows = sqlx::query_as(
        "SELECT s.venue_id, v.name AS venue_name,
                s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.start_time",
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Insert a new show, returning its id
///
/// Referenced artist/venue ids are not pre-checked; a dangling reference
/// fails the insert through the foreign key constraint.
pub async fn insert(db: &SqlitePool, input: &ShowInput) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(input.artist_id)
    .bind(input.venue_id)
    .bind(format_timestamp(input.start_time))
    .execute(db)
    .await?;
    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_artist, seed_show, seed_venue, test_pool};
    use crate::time::parse_start_time;

    #[tokio::test]
    async fn test_list_orders_by_start_time_with_joined_names() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let a1 = seed_artist(&pool, "Slow Loris").await;
        let a2 = seed_artist(&pool, "Night Bus").await;
        seed_show(&pool, a2, venue_id, "2035-02-01 20:00:00").await;
        seed_show(&pool, a1, venue_id, "2035-01-01 20:00:00").await;

        let rows = list(&pool).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].artist_name, "Slow Loris");
        assert_eq!(rows[0].venue_name, "The Dive");
        assert_eq!(rows[1].artist_name, "Night Bus");
    }

    #[tokio::test]
    async fn test_insert_formats_start_time_for_storage() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Slow Loris").await;

        let input = ShowInput {
            artist_id,
            venue_id,
            // datetime-local layout from the form
            start_time: parse_start_time("2035-05-21T21:30").unwrap(),
        };
        insert(&pool, &input).await.unwrap();

        let stored: String = sqlx::query_scalar("SELECT start_time FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, "2035-05-21 21:30:00");
    }

    #[tokio::test]
    async fn test_insert_with_dangling_reference_fails_cleanly() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;

        let input = ShowInput {
            artist_id: 9999,
            venue_id,
            start_time: parse_start_time("2035-05-21 21:30:00").unwrap(),
        };
        assert!(insert(&pool, &input).await.is_err());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
