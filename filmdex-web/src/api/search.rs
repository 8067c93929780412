//! Film search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use filmdex_common::film::FilmRecord;
use filmdex_common::filter::SearchFilter;

use crate::db::films;
use crate::AppState;

use super::ApiError;

/// Search response envelope
#[derive(Debug, Serialize)]
pub struct FilmListResponse {
    pub status: String,
    pub data: Vec<FilmRecord>,
}

/// GET /api/search?dx_number=162-2&name=...&limit=...
///
/// Search the catalog by DX code and/or free text. A filter that fails
/// normalization (conflicting codes, malformed codes, no criteria at all)
/// is a client error.
pub async fn api_search(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> Result<Json<FilmListResponse>, ApiError> {
    let filter = filter.normalize()?;
    let data = films::search(&state.db, &filter, state.cdn_base_url()).await?;

    Ok(Json(FilmListResponse {
        status: "ok".to_string(),
        data,
    }))
}
