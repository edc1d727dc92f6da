//! gigbook-web library - booking site HTTP layer
//!
//! Exposes the application state and router so integration tests can drive
//! the full app without binding a socket.

use axum::{routing::get, routing::post, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod forms;
pub mod templates;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home::home_page))
        // Venues
        .route("/venues", get(api::venues::venue_listing))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::new_venue_form).post(api::venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(api::venues::venue_detail).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::update_venue),
        )
        // Artists
        .route("/artists", get(api::artists::artist_listing))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::new_artist_form).post(api::artists::create_artist),
        )
        .route("/artists/:id", get(api::artists::artist_detail))
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::update_artist),
        )
        // Shows
        .route("/shows", get(api::shows::show_listing))
        .route(
            "/shows/create",
            get(api::shows::new_show_form).post(api::shows::create_show),
        )
        .merge(api::health::health_routes())
        .fallback(api::error::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
