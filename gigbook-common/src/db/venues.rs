//! Venue queries
//!
//! All upcoming/past predicates bind a caller-supplied "now" timestamp so the
//! boundary is testable without freezing the clock.

use chrono::NaiveDateTime;
use sqlx::{types::Json, SqlitePool};

use crate::db::models::{CityGroup, SearchRow, Venue, VenueInput, VenueListingRow, VenueShowRow};
use crate::error::{Error, Result};
use crate::time::format_timestamp;

/// List all venues grouped by (city, state), each with its upcoming-show count
///
/// Groups are ordered by state, city; venues within a group by name. The
/// count is a correlated subquery so the grouping pass stays a single scan
/// over the ordered rows.
pub async fn list_grouped(db: &SqlitePool, now: NaiveDateTime) -> Result<Vec<CityGroup>> {
    let rows: Vec<VenueListingRow> = sqlx::query_as(
        "SELECT v.id, v.name, v.city, v.state,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         ORDER BY v.state, v.city, v.name",
    )
    .bind(format_timestamp(now))
    .fetch_all(db)
    .await?;

    let mut groups: Vec<CityGroup> = Vec::new();
    for row in rows {
        match groups.last_mut() {
            Some(group) if group.city == row.city && group.state == row.state => {
                group.venues.push(row);
            }
            _ => groups.push(CityGroup {
                city: row.city.clone(),
                state: row.state.clone(),
                venues: vec![row],
            }),
        }
    }
    Ok(groups)
}

/// Case-insensitive substring search on venue name
///
/// `%` and `_` in the term pass through to LIKE; an empty term matches
/// every venue.
pub async fn search(db: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<Vec<SearchRow>> {
    let rows = sqlx::query_as(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         WHERE v.name LIKE ?
         ORDER BY v.name",
    )
    .bind(format_timestamp(now))
    .bind(format!("%{}%", term))
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Fetch a single venue by id
pub async fn get(db: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>(
        "SELECT id, name, city, state, address, phone, genres,
                facebook_link, image_link, website_link,
                looking_for_talent, seeking_description
         FROM venues WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(venue)
}

/// Shows at a venue split into (past, upcoming), each ordered by start time
///
/// A show starting exactly at `now` counts as past: upcoming means strictly
/// after the current time.
pub async fn shows_split(
    db: &SqlitePool,
    venue_id: i64,
    now: NaiveDateTime,
) -> Result<(Vec<VenueShowRow>, Vec<VenueShowRow>)> {
    let now_text = format_timestamp(now);

    let past = sqlx::query_as(
        "SELECT a.id AS artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ? AND s.start_time <= ?
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .bind(&now_text)
    .fetch_all(db)
    .await?;

    let upcoming = sqlx::query_as(
        "SELECT a.id AS artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ? AND s.start_time > ?
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .bind(&now_text)
    .fetch_all(db)
    .await?;

    Ok((past, upcoming))
}

/// Insert a new venue, returning its id
pub async fn insert(db: &SqlitePool, input: &VenueInput) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, genres,
                             facebook_link, image_link, website_link,
                             looking_for_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.looking_for_talent)
    .bind(&input.seeking_description)
    .execute(db)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Update a venue in place
pub async fn update(db: &SqlitePool, id: i64, input: &VenueInput) -> Result<()> {
    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
             facebook_link = ?, image_link = ?, website_link = ?,
             looking_for_talent = ?, seeking_description = ?,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(Json(&input.genres))
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(&input.website_link)
    .bind(input.looking_for_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }
    Ok(())
}

/// Delete a venue; its shows cascade. Returns false if the id did not exist.
pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_artist, seed_show, seed_venue, test_pool};
    use crate::time::parse_start_time;

    #[tokio::test]
    async fn test_list_grouped_orders_and_groups_by_location() {
        let (pool, _dir) = test_pool().await;
        seed_venue(&pool, "The Dive", "Portland", "OR").await;
        seed_venue(&pool, "Aura", "Portland", "ME").await;
        seed_venue(&pool, "Crystal Ballroom", "Portland", "OR").await;
        seed_venue(&pool, "First Avenue", "Minneapolis", "MN").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let groups = list_grouped(&pool, now).await.unwrap();

        // Ordered by state then city; both Portland OR venues share one group
        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.city.as_str(), g.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Portland", "ME"),
                ("Minneapolis", "MN"),
                ("Portland", "OR"),
            ]
        );
        assert_eq!(groups[2].venues.len(), 2);
        assert_eq!(groups[2].venues[0].name, "Crystal Ballroom");
    }

    #[tokio::test]
    async fn test_listing_counts_only_upcoming_shows() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Slow Loris").await;
        seed_show(&pool, artist_id, venue_id, "2020-06-15 20:00:00").await;
        seed_show(&pool, artist_id, venue_id, "2035-06-15 20:00:00").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let groups = list_grouped(&pool, now).await.unwrap();
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let (pool, _dir) = test_pool().await;
        seed_venue(&pool, "The Musical Hop", "New York", "NY").await;
        seed_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
        seed_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let results = search(&pool, "MUSIC", now).await.unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Park Square Live Music & Coffee", "The Musical Hop"]
        );
    }

    #[tokio::test]
    async fn test_search_empty_term_matches_everything() {
        let (pool, _dir) = test_pool().await;
        seed_venue(&pool, "A", "X", "Y").await;
        seed_venue(&pool, "B", "X", "Y").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let results = search(&pool, "", now).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_show_starting_exactly_now_is_past() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Slow Loris").await;
        seed_show(&pool, artist_id, venue_id, "2026-01-01 00:00:00").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let (past, upcoming) = shows_split(&pool, venue_id, now).await.unwrap();
        assert_eq!(past.len(), 1);
        assert!(upcoming.is_empty());
    }

    #[tokio::test]
    async fn test_shows_split_joins_artist_fields_in_start_time_order() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let a1 = seed_artist(&pool, "Slow Loris").await;
        let a2 = seed_artist(&pool, "Night Bus").await;
        seed_show(&pool, a2, venue_id, "2035-02-01 20:00:00").await;
        seed_show(&pool, a1, venue_id, "2035-01-01 20:00:00").await;

        let now = parse_start_time("2026-01-01 00:00:00").unwrap();
        let (past, upcoming) = shows_split(&pool, venue_id, now).await.unwrap();
        assert!(past.is_empty());
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].artist_name, "Slow Loris");
        assert_eq!(upcoming[1].artist_name, "Night Bus");
        assert_eq!(upcoming[0].start_time, "2035-01-01 20:00:00");
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips_all_fields() {
        let (pool, _dir) = test_pool().await;
        let input = VenueInput {
            name: "The Musical Hop".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "1015 Folsom Street".into(),
            phone: Some("123-123-1234".into()),
            genres: vec!["Jazz".into(), "Folk".into()],
            facebook_link: Some("https://facebook.com/musicalhop".into()),
            image_link: None,
            website_link: Some("https://musicalhop.example".into()),
            looking_for_talent: true,
            seeking_description: Some("Looking for local acts".into()),
        };
        let id = insert(&pool, &input).await.unwrap();

        let venue = get(&pool, id).await.unwrap().unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres.0, vec!["Jazz".to_string(), "Folk".to_string()]);
        assert!(venue.looking_for_talent);
        assert_eq!(venue.phone.as_deref(), Some("123-123-1234"));
    }

    #[tokio::test]
    async fn test_duplicate_name_insert_fails_without_side_effects() {
        let (pool, _dir) = test_pool().await;
        seed_venue(&pool, "The Dive", "Portland", "OR").await;

        let input = VenueInput {
            name: "The Dive".into(),
            city: "Elsewhere".into(),
            state: "CA".into(),
            address: "1 Main St".into(),
            phone: None,
            genres: vec![],
            facebook_link: None,
            image_link: None,
            website_link: None,
            looking_for_talent: false,
            seeking_description: None,
        };
        assert!(insert(&pool, &input).await.is_err());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_shows() {
        let (pool, _dir) = test_pool().await;
        let venue_id = seed_venue(&pool, "The Dive", "Portland", "OR").await;
        let artist_id = seed_artist(&pool, "Slow Loris").await;
        seed_show(&pool, artist_id, venue_id, "2035-01-01 20:00:00").await;

        assert!(delete(&pool, venue_id).await.unwrap());
        let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(shows, 0);

        // Deleting again reports the missing id
        assert!(!delete(&pool, venue_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_venue_is_not_found() {
        let (pool, _dir) = test_pool().await;
        let input = VenueInput {
            name: "Ghost".into(),
            city: "Nowhere".into(),
            state: "XX".into(),
            address: "0 Null Ave".into(),
            phone: None,
            genres: vec![],
            facebook_link: None,
            image_link: None,
            website_link: None,
            looking_for_talent: false,
            seeking_description: None,
        };
        assert!(matches!(
            update(&pool, 42, &input).await,
            Err(Error::NotFound(_))
        ));
    }
}
