//! Show pages: listing and create
//!
//! Shows have no detail, edit, or delete pages. The create form takes the
//! artist and venue ids directly; a dangling id is caught by the database's
//! foreign key check, not pre-validated.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{error, info};

use gigbook_common::db::shows;

use crate::api::home::render_home;
use crate::api::PageError;
use crate::forms::ShowForm;
use crate::templates::{ShowFormTemplate, ShowsTemplate};
use crate::AppState;

/// GET /shows
///
/// All shows ordered by start time, joined with venue and artist names.
pub async fn show_listing(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let shows = shows::list(&state.db).await?;
    let page = ShowsTemplate { shows };
    Ok(Html(page.render()?))
}

/// GET /shows/create
pub async fn new_show_form() -> Result<Html<String>, PageError> {
    let page = ShowFormTemplate {
        form: ShowForm::default(),
        errors: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = ShowFormTemplate { form, errors };
            return Ok(Html(page.render()?).into_response());
        }
    };

    match shows::insert(&state.db, &input).await {
        Ok(id) => {
            info!(
                "Created show {} (artist {} at venue {})",
                id, input.artist_id, input.venue_id
            );
            render_home(Some("Show was successfully listed!".to_string()))
        }
        Err(e) => {
            error!("Failed to create show: {}", e);
            render_home(Some(
                "An error occurred. Show could not be listed.".to_string(),
            ))
        }
    }
}
