//! Database models and query row types
//!
//! Timestamps travel as `YYYY-MM-DD HH:MM:SS` text end to end (storage and
//! display use the same layout), so show rows carry `String` start times and
//! the query layer binds pre-formatted "now" values for the upcoming/past
//! predicates.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// A bookable venue
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Json<Vec<String>>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub looking_for_talent: bool,
    pub seeking_description: Option<String>,
}

/// A bookable artist
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Json<Vec<String>>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub looking_for_venue: bool,
    pub seeking_description: Option<String>,
}

/// A booking linking one artist to one venue at a start time
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: String,
}

/// Validated venue fields for insert/update
#[derive(Debug, Clone)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub looking_for_talent: bool,
    pub seeking_description: Option<String>,
}

/// Validated artist fields for insert/update
#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub looking_for_venue: bool,
    pub seeking_description: Option<String>,
}

/// Validated show fields for insert
#[derive(Debug, Clone)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: chrono::NaiveDateTime,
}

/// Venue listing row with its upcoming-show count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueListingRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a (city, state), in listing order
#[derive(Debug, Clone)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListingRow>,
}

/// Search result row (venue or artist) with its upcoming-show count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SearchRow {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Artist listing row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtistListingRow {
    pub id: i64,
    pub name: String,
}

/// Show at a venue, joined with the artist's display fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VenueShowRow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Show by an artist, joined with the venue's display fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArtistShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

/// Show listing row joined with both counterpart entities
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowListingRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}
