//! Artist pages: listing, search, detail, create, edit
//!
//! Same flow as the venue pages; artists have no delete endpoint.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{error, info};

use gigbook_common::db::artists;
use gigbook_common::time;

use crate::api::home::render_home;
use crate::api::venues::{DetailQuery, SearchForm};
use crate::api::PageError;
use crate::forms::ArtistForm;
use crate::templates::{
    ArtistDetailTemplate, ArtistFormTemplate, ArtistSearchTemplate, ArtistsTemplate,
};
use crate::AppState;

/// GET /artists
pub async fn artist_listing(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists = artists::list(&state.db).await?;
    let page = ArtistsTemplate { artists };
    Ok(Html(page.render()?))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = artists::search(&state.db, &form.search_term, time::now()).await?;
    let page = ArtistSearchTemplate {
        term: form.search_term,
        results,
    };
    Ok(Html(page.render()?))
}

/// GET /artists/:id
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, PageError> {
    let artist = artists::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", id)))?;
    let (past, upcoming) = artists::shows_split(&state.db, id, time::now()).await?;

    let flash = query
        .flash
        .as_deref()
        .and_then(|code| flash_text(code, &artist.name))
        .unwrap_or_default();

    let page = ArtistDetailTemplate {
        artist: artist.into(),
        past: past.into_iter().map(Into::into).collect(),
        upcoming: upcoming.into_iter().map(Into::into).collect(),
        flash,
    };
    Ok(Html(page.render()?))
}

/// GET /artists/create
pub async fn new_artist_form() -> Result<Html<String>, PageError> {
    let page = ArtistFormTemplate {
        heading: "List a new artist".to_string(),
        action: "/artists/create".to_string(),
        form: ArtistForm::default(),
        errors: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = ArtistFormTemplate {
                heading: "List a new artist".to_string(),
                action: "/artists/create".to_string(),
                form,
                errors,
            };
            return Ok(Html(page.render()?).into_response());
        }
    };

    let name = input.name.clone();
    match artists::insert(&state.db, &input).await {
        Ok(id) => {
            info!("Created artist {} ({})", id, name);
            render_home(Some(format!("Artist {} was successfully listed!", name)))
        }
        Err(e) => {
            error!("Failed to create artist {}: {}", name, e);
            render_home(Some(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            )))
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let artist = artists::get(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", id)))?;

    let page = ArtistFormTemplate {
        heading: format!("Edit artist {}", artist.name),
        action: format!("/artists/{}/edit", id),
        form: ArtistForm::from_artist(&artist),
        errors: Vec::new(),
    };
    Ok(Html(page.render()?))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    if artists::get(&state.db, id).await?.is_none() {
        return Err(PageError::NotFound(format!("artist {}", id)));
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = ArtistFormTemplate {
                heading: "Edit artist".to_string(),
                action: format!("/artists/{}/edit", id),
                form,
                errors,
            };
            return Ok(Html(page.render()?).into_response());
        }
    };

    match artists::update(&state.db, id, &input).await {
        Ok(()) => {
            info!("Updated artist {}", id);
            Ok(Redirect::to(&format!("/artists/{}?flash=updated", id)).into_response())
        }
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            Ok(Redirect::to(&format!("/artists/{}?flash=update_failed", id)).into_response())
        }
    }
}

fn flash_text(code: &str, name: &str) -> Option<String> {
    match code {
        "updated" => Some(format!("Artist {} was successfully updated!", name)),
        "update_failed" => Some(format!(
            "An error occurred. Artist {} could not be updated.",
            name
        )),
        _ => None,
    }
}
