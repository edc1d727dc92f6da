//! Artist queries
//!
//! Same shape as the venue queries: a bound "now" drives the upcoming/past
//! predicates. Artists have no delete path.

use chrono::NaiveDateTime;
use sqlx::{types::Json, SqlitePool};

use crate::db::models::{Artist, ArtistInput, ArtistListingRow, ArtistShowRow, SearchRow};
use crate::error::{Error, Result};
use crate::time::format_timestamp;

/// Flat artist listing ordered by name
pub async fn list(db: &SqlitePool) -> Result<Vec<ArtistListingRow>> {
    let rows = sqlx::query_as("SELECT id, name FROM artists ORDER BY name")
        .fetch_all(db)
        .await?;
    Ok(rows)
}

/// Case-insensitive substring search on artist name
pub async fn search(db: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<Vec<SearchRow>> {
    let rows = sqlx::query_as(
        "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
         FROM artists a
         WHERE a.name LIKE ?
         ORDER BY a.name",
    )
    .bind(format_timestamp(now))
    .bind(format!("%{}%", term))
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Fetch a single artist by id
pub async fn get(db: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(
        "SELECT id, name, city, state, phone, genres,
                facebook_link, image_link, website_link,
                looking_for_venue, seeking_description
         FROM artists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(artist)
}

/// Shows by an artist split into (past, upcoming), ordered by start time
pub async fn shows_split(
    db: &SqlitePool,
    artist_id: i64,
    now: NaiveDateTime,
) -> Result<(Vec<ArtistShowRow>, Vec<ArtistShowRow>)> {
    let now_text = format_timestamp(now);

    let past = sqlx::query_as(
        "SELECT v.id AS venue_id, v.name AS venue_name,
                v.image_link AS venue_image_link, s.start_time
         FROM shows s JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ? AND s.start_time <= ?
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .bind(&now_text)
    .fetch_all(db)
    .await?;

    let upcoming = sqlx::query_as(
        "SELECT v.id AS venue_id, v.name AS venue_name,
                v.image_link AS venue_image_link, s.start_time
         FROM shows s JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ? AND s.start_time > ?
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .bind(&now_text)
    .fetch_all(db)
    .await?;

    Ok((past, upcoming))
}

/// Insert a new artist, returning its id
pub async fn insert(db: &SqlitePool, input: &ArtistInput) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres,
                              facebook_link, image_link, website_link,
                              looking_for_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.looking_for_venue)
    .bind(&input.seeking_description)
    .execute(db)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update an artist in place
pub async fn update(db: &SqlitePool, id: i64, input: &ArtistInput) -> Result<()> {
    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, city = ?, state = ?, phone = ?, genres = ?,
             facebook_link = ?, image_link = ?, website_link = ?,
             looking_for_venue = ?, seeking_description = ?,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.looking_for_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_artist, seed_show, seed_venue, test_pool};
    use crate::time::parse_start_time;

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let (pool, _dir) = test_pool().await;
        seed_artist(&pool, "Night Bus").await;
        seed_artist(&pool, "Aurora Tide").await;

        let rows = list(&pool).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Aurora Tide", "Night Bus"]);
    }

    #[tokio::test]
    async fn test_search_counts_upcoming_shows() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Night Bus").await;
        seed_artist(&pool, "Aurora Tide").await;
        seed_show(&pool, artist_id, venue_id, "2035-01-01 20:00:00").await;
        seed_show(&pool, artist_id, venue_id, "2020-01-01 20:00:00").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let results = search(&pool, "night", now).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Night Bus");
        assert_eq!(results[0].num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn test_future_show_is_upcoming_for_artist() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Night Bus").await;
        seed_show(&pool, artist_id, venue_id, "2035-01-01 20:00:00").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let (past, upcoming) = shows_split(&pool, artist_id, now).await.unwrap();
        assert!(past.is_empty());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue_name, "The Dive");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (pool, _dir) = test_pool().await;
        let id = seed_artist(&pool, "Night Bus").await;

        let input = ArtistInput {
            name: "Night Bus Collective".into(),
            city: "Seattle".into(),
            state: "WA".into(),
            phone: Some("555-0000".into()),
            genres: vec!["Electronic".into()],
            facebook_link: None,
            image_link: None,
            website_link: None,
            looking_for_venue: true,
            seeking_description: Some("Weekend slots preferred".into()),
        };
        update(&pool, id, &input).await.unwrap();

        let artist = get(&pool, id).await.unwrap().unwrap();
        assert_eq!(artist.name, "Night Bus Collective");
        assert_eq!(artist.city, "Seattle");
        assert!(artist.looking_for_venue);
        assert_eq!(artist.genres.0, vec!["Electronic".to_string()]);
    }
}
