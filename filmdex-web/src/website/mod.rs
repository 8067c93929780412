//! HTML website handlers
//!
//! The website mirrors the JSON API's search semantics with one deliberate
//! difference: a search without criteria redirects to the home page instead
//! of returning an error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use rand::Rng;
use tracing::error;

use filmdex_common::filter::{SearchFilter, MAX_RESULTS};
use filmdex_common::Error;

use crate::db::films;
use crate::AppState;

mod pages;

/// GET /
///
/// Home page, populated with a random film from the catalog.
pub async fn index_page(State(state): State<AppState>) -> Response {
    let film = if state.total_count > 0 {
        let rowid = rand::thread_rng().gen_range(1..=state.total_count);
        match films::get_by_rowid(&state.db, rowid, state.cdn_base_url()).await {
            Ok(film) => film,
            Err(e) => {
                error!("Failed to load random film: {}", e);
                None
            }
        }
    } else {
        None
    };

    Html(pages::render_index(film.as_ref(), state.total_count)).into_response()
}

/// GET /help
pub async fn help_page() -> Html<&'static str> {
    Html(pages::HELP_HTML)
}

/// GET /search
///
/// Same normalization as the API search; an empty filter means "not a
/// search" here and goes home instead of erroring.
pub async fn search_page(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Response {
    let filter = match filter.normalize() {
        Ok(filter) => filter,
        Err(Error::NoSearchCriteria) => return Redirect::to("/").into_response(),
        Err(err) if err.is_client_error() => {
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::render_error(&err.to_string())),
            )
                .into_response();
        }
        Err(err) => {
            error!("Search normalization failed: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::render_error("Internal server error")),
            )
                .into_response();
        }
    };

    // Film type label for the effective extract (explicit, or derived from
    // the middle four digits of the full code)
    let film_type = filter
        .dx_extract
        .clone()
        .or_else(|| filter.dx_full.as_ref().and_then(|f| f.get(1..5).map(str::to_string)))
        .and_then(|extract| state.film_types.resolve(&extract).map(str::to_string));

    let result = films::search(&state.db, &filter, state.cdn_base_url()).await;
    let search_films = match result {
        Ok(search_films) => search_films,
        Err(Error::NoSearchCriteria) => return Redirect::to("/").into_response(),
        Err(err) => {
            error!("Search failed: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::render_error("Internal server error")),
            )
                .into_response();
        }
    };

    let too_many_results = search_films.len() >= MAX_RESULTS;
    Html(pages::render_search(
        &search_films,
        film_type.as_deref(),
        too_many_results,
    ))
    .into_response()
}

/// GET /film/{url_name}
pub async fn film_page(
    State(state): State<AppState>,
    Path(url_name): Path<String>,
) -> Response {
    let film = match films::get_by_url(&state.db, &url_name, state.cdn_base_url()).await {
        Ok(film) => film,
        Err(e) => {
            error!("Film lookup failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::render_error("Internal server error")),
            )
                .into_response();
        }
    };

    match film {
        Some(film) => {
            let film_type = film
                .dx_extract
                .as_deref()
                .and_then(|extract| state.film_types.resolve(extract));
            Html(pages::render_film(&film, film_type)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Html(pages::render_error("Film not found")),
        )
            .into_response(),
    }
}
