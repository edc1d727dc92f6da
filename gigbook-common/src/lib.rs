//! # Gigbook Common Library
//!
//! Shared code for the gigbook booking site:
//! - Database schema, models and queries
//! - Configuration loading
//! - Timestamp helpers
//! - Common error type

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
