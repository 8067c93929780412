//! JSON API handlers for filmdex-web

pub mod error;
pub mod film;
pub mod health;
pub mod search;

pub use error::ApiError;
pub use film::api_film_by_url;
pub use health::health_check;
pub use search::api_search;
