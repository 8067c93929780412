//! filmdex-web library - film catalog lookup service
//!
//! Serves a JSON API and a small HTML website over a read-only SQLite
//! catalog of photographic film stocks, searchable by DX code or free text.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use filmdex_common::config::Settings;

use crate::db::film_types::FilmTypeTable;

pub mod api;
pub mod db;
pub mod website;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog connection pool (read-only)
    pub db: SqlitePool,
    /// DX extract to film type label ranges, loaded once at startup
    pub film_types: Arc<FilmTypeTable>,
    /// Number of films in the catalog, counted once at startup
    pub total_count: i64,
    /// Service settings (CDN base URL for pictures)
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        db: SqlitePool,
        film_types: FilmTypeTable,
        total_count: i64,
        settings: Settings,
    ) -> Self {
        Self {
            db,
            film_types: Arc::new(film_types),
            total_count,
            settings: Arc::new(settings),
        }
    }

    /// Base URL used to absolutize film picture paths
    pub fn cdn_base_url(&self) -> &str {
        self.settings.image_cdn_base_url()
    }
}

/// Build application router: JSON API under /api, HTML website at the root
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/health", get(api::health_check))
        .route("/api/search", get(api::api_search))
        .route("/api/film/:url_name", get(api::api_film_by_url));

    let website = Router::new()
        .route("/", get(website::index_page))
        .route("/help", get(website::help_page))
        .route("/search", get(website::search_page))
        .route("/film/:url_name", get(website::film_page));

    Router::new()
        .merge(api)
        .merge(website)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
