//! Page templates and their view models
//!
//! One askama struct per page. View models carry plain `String` fields
//! (empty string = absent) so the templates stay free of `Option` plumbing.

use askama::Template;

use gigbook_common::db::{
    Artist, ArtistListingRow, ArtistShowRow, CityGroup, SearchRow, ShowListingRow, Venue,
    VenueShowRow,
};

use crate::forms::{ArtistForm, ShowForm, VenueForm};

/// Venue profile fields for the detail page
pub struct VenueView {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    pub looking_for_talent: bool,
    pub seeking_description: String,
}

impl From<Venue> for VenueView {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            genres: venue.genres.0,
            facebook_link: venue.facebook_link.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            website_link: venue.website_link.unwrap_or_default(),
            looking_for_talent: venue.looking_for_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
        }
    }
}

/// Artist profile fields for the detail page
pub struct ArtistView {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website_link: String,
    pub looking_for_venue: bool,
    pub seeking_description: String,
}

impl From<Artist> for ArtistView {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone.unwrap_or_default(),
            genres: artist.genres.0,
            facebook_link: artist.facebook_link.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            website_link: artist.website_link.unwrap_or_default(),
            looking_for_venue: artist.looking_for_venue,
            seeking_description: artist.seeking_description.unwrap_or_default(),
        }
    }
}

/// One show row on a detail page, pointing at the counterpart entity
pub struct ShowView {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image: String,
    pub start_time: String,
}

impl From<VenueShowRow> for ShowView {
    fn from(row: VenueShowRow) -> Self {
        Self {
            counterpart_id: row.artist_id,
            counterpart_name: row.artist_name,
            counterpart_image: row.artist_image_link.unwrap_or_default(),
            start_time: row.start_time,
        }
    }
}

impl From<ArtistShowRow> for ShowView {
    fn from(row: ArtistShowRow) -> Self {
        Self {
            counterpart_id: row.venue_id,
            counterpart_name: row.venue_name,
            counterpart_image: row.venue_image_link.unwrap_or_default(),
            start_time: row.start_time,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub flash: String,
}

#[derive(Template)]
#[template(path = "venues.html")]
pub struct VenuesTemplate {
    pub groups: Vec<CityGroup>,
}

#[derive(Template)]
#[template(path = "venue_search.html")]
pub struct VenueSearchTemplate {
    pub term: String,
    pub results: Vec<SearchRow>,
}

#[derive(Template)]
#[template(path = "venue_detail.html")]
pub struct VenueDetailTemplate {
    pub venue: VenueView,
    pub past: Vec<ShowView>,
    pub upcoming: Vec<ShowView>,
    pub flash: String,
}

#[derive(Template)]
#[template(path = "venue_form.html")]
pub struct VenueFormTemplate {
    pub heading: String,
    pub action: String,
    pub form: VenueForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistsTemplate {
    pub artists: Vec<ArtistListingRow>,
}

#[derive(Template)]
#[template(path = "artist_search.html")]
pub struct ArtistSearchTemplate {
    pub term: String,
    pub results: Vec<SearchRow>,
}

#[derive(Template)]
#[template(path = "artist_detail.html")]
pub struct ArtistDetailTemplate {
    pub artist: ArtistView,
    pub past: Vec<ShowView>,
    pub upcoming: Vec<ShowView>,
    pub flash: String,
}

#[derive(Template)]
#[template(path = "artist_form.html")]
pub struct ArtistFormTemplate {
    pub heading: String,
    pub action: String,
    pub form: ArtistForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsTemplate {
    pub shows: Vec<ShowListingRow>,
}

#[derive(Template)]
#[template(path = "show_form.html")]
pub struct ShowFormTemplate {
    pub form: ShowForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {}

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate {}
