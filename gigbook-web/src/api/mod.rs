//! HTTP handlers, one module per page family

pub mod artists;
pub mod error;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use error::PageError;
