//! Single film lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use filmdex_common::film::FilmRecord;
use filmdex_common::Error;

use crate::db::films;
use crate::AppState;

use super::ApiError;

/// Single film response envelope
#[derive(Debug, Serialize)]
pub struct FilmResponse {
    pub status: String,
    pub data: FilmRecord,
}

/// GET /api/film/{url_name}
///
/// Return one film by its unique URL-safe name.
pub async fn api_film_by_url(
    State(state): State<AppState>,
    Path(url_name): Path<String>,
) -> Result<Json<FilmResponse>, ApiError> {
    if url_name.len() > 255 {
        return Err(Error::InvalidInput("url_name too long (max 255 characters)".into()).into());
    }

    let film = films::get_by_url(&state.db, &url_name, state.cdn_base_url())
        .await?
        .ok_or_else(|| Error::NotFound("Film not found".to_string()))?;

    Ok(Json(FilmResponse {
        status: "ok".to_string(),
        data: film,
    }))
}
