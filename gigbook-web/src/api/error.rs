//! Page-level error type
//!
//! Collapses everything a handler can fail with into the two dedicated error
//! pages: unknown ids and unmatched routes render the 404 page, database and
//! template failures render the 500 page. No error detail reaches the user;
//! the detail goes to the log.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::templates::{NotFoundTemplate, ServerErrorTemplate};

/// Errors surfaced from page handlers
#[derive(Debug)]
pub enum PageError {
    /// Entity or route does not exist
    NotFound(String),
    /// Database failure
    Database(gigbook_common::Error),
    /// Template rendering failure
    Render(askama::Error),
}

impl From<gigbook_common::Error> for PageError {
    fn from(err: gigbook_common::Error) -> Self {
        match err {
            gigbook_common::Error::NotFound(what) => PageError::NotFound(what),
            other => PageError::Database(other),
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::Render(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(what) => {
                warn!("Not found: {}", what);
                error_page(StatusCode::NOT_FOUND, NotFoundTemplate {}.render())
            }
            PageError::Database(err) => {
                error!("Database error: {}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate {}.render())
            }
            PageError::Render(err) => {
                error!("Template rendering error: {}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate {}.render())
            }
        }
    }
}

/// Render an error page, falling back to plain text if the template itself
/// fails
fn error_page(status: StatusCode, rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Error page failed to render: {}", err);
            (status, "Something went wrong").into_response()
        }
    }
}

/// Fallback handler for unmatched routes
pub async fn not_found(uri: axum::http::Uri) -> PageError {
    PageError::NotFound(format!("no route for {}", uri.path()))
}
