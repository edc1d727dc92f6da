//! Database layer: schema initialization, models, and queries

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

#[cfg(test)]
pub(crate) mod test_support;

pub use init::init_database;
pub use models::{
    Artist, ArtistInput, ArtistListingRow, ArtistShowRow, CityGroup, SearchRow, Show, ShowInput,
    ShowListingRow, Venue, VenueInput, VenueListingRow, VenueShowRow,
};
