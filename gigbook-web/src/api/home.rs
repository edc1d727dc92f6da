//! Home page

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::api::PageError;
use crate::templates::HomeTemplate;

/// GET /
pub async fn home_page() -> Result<Response, PageError> {
    render_home(None)
}

/// Render the home page, optionally with a transient message
///
/// Create handlers land here after an insert so the outcome message rides
/// in the rendered page itself.
pub fn render_home(flash: Option<String>) -> Result<Response, PageError> {
    let page = HomeTemplate {
        flash: flash.unwrap_or_default(),
    };
    Ok(Html(page.render()?).into_response())
}
