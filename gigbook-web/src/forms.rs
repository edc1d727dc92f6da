//! Form payloads and validation
//!
//! One struct per HTML form, deserialized by axum's `Form` extractor.
//! `validate()` either produces the typed input the query layer takes, or
//! the list of field errors to re-render the form with. Checkboxes arrive
//! as `Option<String>` (present when checked); genres arrive as one
//! comma-separated text field.

use gigbook_common::db::models::{ArtistInput, ShowInput, VenueInput};
use gigbook_common::db::{Artist, Venue};
use gigbook_common::time::parse_start_time;
use serde::Deserialize;

/// Venue create/edit form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub looking_for_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    /// Pre-fill the form from an existing row (edit page)
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.0.join(", "),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            looking_for_talent: venue.looking_for_talent.then(|| "on".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Whether the seeking-talent checkbox was checked (template helper)
    pub fn talent_checked(&self) -> bool {
        self.looking_for_talent.is_some()
    }

    pub fn validate(&self) -> Result<VenueInput, Vec<String>> {
        let mut errors = Vec::new();

        require(&mut errors, &self.name, "Name");
        require(&mut errors, &self.city, "City");
        require(&mut errors, &self.state, "State");
        require(&mut errors, &self.address, "Address");
        check_phone(&mut errors, &self.phone);
        check_link(&mut errors, &self.facebook_link, "Facebook link");
        check_link(&mut errors, &self.image_link, "Image link");
        check_link(&mut errors, &self.website_link, "Website link");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VenueInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: optional(&self.phone),
            genres: split_genres(&self.genres),
            facebook_link: optional(&self.facebook_link),
            image_link: optional(&self.image_link),
            website_link: optional(&self.website_link),
            looking_for_talent: self.looking_for_talent.is_some(),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

/// Artist create/edit form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub looking_for_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    /// Pre-fill the form from an existing row (edit page)
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.0.join(", "),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            looking_for_venue: artist.looking_for_venue.then(|| "on".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Whether the seeking-venue checkbox was checked (template helper)
    pub fn venue_checked(&self) -> bool {
        self.looking_for_venue.is_some()
    }

    pub fn validate(&self) -> Result<ArtistInput, Vec<String>> {
        let mut errors = Vec::new();

        require(&mut errors, &self.name, "Name");
        require(&mut errors, &self.city, "City");
        require(&mut errors, &self.state, "State");
        check_phone(&mut errors, &self.phone);
        check_link(&mut errors, &self.facebook_link, "Facebook link");
        check_link(&mut errors, &self.image_link, "Image link");
        check_link(&mut errors, &self.website_link, "Website link");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ArtistInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: optional(&self.phone),
            genres: split_genres(&self.genres),
            facebook_link: optional(&self.facebook_link),
            image_link: optional(&self.image_link),
            website_link: optional(&self.website_link),
            looking_for_venue: self.looking_for_venue.is_some(),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

/// Show create form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(&self) -> Result<ShowInput, Vec<String>> {
        let mut errors = Vec::new();

        let artist_id = parse_id(&mut errors, &self.artist_id, "Artist ID");
        let venue_id = parse_id(&mut errors, &self.venue_id, "Venue ID");

        let start_time = if self.start_time.trim().is_empty() {
            errors.push("Start time is required".to_string());
            None
        } else {
            match parse_start_time(&self.start_time) {
                Ok(ts) => Some(ts),
                Err(_) => {
                    errors.push(
                        "Start time must be a date and time like 2035-05-21 21:30".to_string(),
                    );
                    None
                }
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowInput {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn require(errors: &mut Vec<String>, value: &str, field: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", field));
    }
}

fn check_phone(errors: &mut Vec<String>, phone: &str) {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return;
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || " +-()".contains(c));
    if !valid {
        errors.push("Phone may only contain digits, spaces, and + - ( )".to_string());
    }
}

fn check_link(errors: &mut Vec<String>, link: &str, field: &str) {
    let trimmed = link.trim();
    if trimmed.is_empty() {
        return;
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        errors.push(format!("{} must start with http:// or https://", field));
    }
}

fn parse_id(errors: &mut Vec<String>, value: &str, field: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(format!("{} is required", field));
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(format!("{} must be a positive whole number", field));
            None
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split the comma-separated genres field, trimming and dropping empties
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
