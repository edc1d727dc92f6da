//! Venue pages: listing, search, detail, create, edit, delete

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{error, info};

use gigbook_common::db::venues;
use gigbook_common::time;

use crate::api::home::render_home;
use crate::api::PageError;
use crate::forms::VenueForm;
use crate::templates::{VenueDetailTemplate, VenueFormTemplate, VenueSearchTemplate, VenuesTemplate};
use crate::AppState;

/// Search form payload
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Flash code carried on edit redirects
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub flash: Option<String>,
}

/// GET /venues
///
/// Venues grouped by (city, state), each with its upcoming-show count.
pub async fn venue_listing(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let groups = venues::list_grouped(&state.db, time::now()).await?;
    let page = VenuesTemplate { groups };
    Ok(Html(page.render()?))
}

/// POST /venues/search
///
/// Case-insensitive substring search on venue name.
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = venues::search(&state.db, &form.search_term, time::now()).await?;
    let page = VenueSearchTemplate {
        term: form.search_term,
        results,
    };
    Ok(Html(page.render()?))
}

/// GET /venues/:id
///
/// Full venue profile plus its shows split into past and upcoming.
pub async fn venue_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, PageError> {
    let venue = venues::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", id)))?;
    let (past, upcoming) = venues::shows_split(&state.db, id, time::now()).await?;

    let flash = query
        .flash
        .as_deref()
        .and_then(|code| flash_text(code, &venue.name))
        .unwrap_or_default();

    let page = VenueDetailTemplate {
        venue: venue.into(),
        past: past.into_iter().map(Into::into).collect(),
        upcoming: upcoming.into_iter().map(Into::into).collect(),
        flash,
    };
    Ok(Html(page.render()?))
}

/// GET /venues/create
pub async fn new_venue_form() -> Result<Html<String>, PageError> {
    let page = VenueFormTemplate {
        heading: "List a new venue".to_string(),
        action: "/venues/create".to_string(),
        form: VenueForm::default(),
        errors: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /venues/create
///
/// Validation failures re-render the form with the submitted values; a
/// persisted insert lands on the home page with the outcome message.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = VenueFormTemplate {
                heading: "List a new venue".to_string(),
                action: "/venues/create".to_string(),
                form,
                errors,
            };
            return Ok(Html(page.render()?).into_response());
        }
    };

    let name = input.name.clone();
    match venues::insert(&state.db, &input).await {
        Ok(id) => {
            info!("Created venue {} ({})", id, name);
            render_home(Some(format!("Venue {} was successfully listed!", name)))
        }
        Err(e) => {
            error!("Failed to create venue {}: {}", name, e);
            render_home(Some(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            )))
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let venue = venues::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", id)))?;

    let page = VenueFormTemplate {
        heading: format!("Edit venue {}", venue.name),
        action: format!("/venues/{}/edit", id),
        form: VenueForm::from_venue(&venue),
        errors: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /venues/:id/edit
///
/// On success redirects to the detail page with a flash code; a persistence
/// failure redirects the same way with the failure code.
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    if venues::get(&state.db, id).await?.is_none() {
        return Err(PageError::NotFound(format!("venue {}", id)));
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = VenueFormTemplate {
                heading: "Edit venue".to_string(),
                action: format!("/venues/{}/edit", id),
                form,
                errors,
            };
            return Ok(Html(page.render()?).into_response());
        }
    };

    match venues::update(&state.db, id, &input).await {
        Ok(()) => {
            info!("Updated venue {}", id);
            Ok(Redirect::to(&format!("/venues/{}?flash=updated", id)).into_response())
        }
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            Ok(Redirect::to(&format!("/venues/{}?flash=update_failed", id)).into_response())
        }
    }
}

/// DELETE /venues/:id
///
/// 204 on success; the detail page's delete button drives this via fetch
/// and redirects home.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PageError> {
    if venues::delete(&state.db, id).await? {
        info!("Deleted venue {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PageError::NotFound(format!("venue {}", id)))
    }
}

fn flash_text(code: &str, name: &str) -> Option<String> {
    match code {
        "updated" => Some(format!("Venue {} was successfully updated!", name)),
        "update_failed" => Some(format!(
            "An error occurred. Venue {} could not be updated.",
            name
        )),
        _ => None,
    }
}
