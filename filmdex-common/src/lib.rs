//! # Filmdex Common Library
//!
//! Shared code for the filmdex lookup service:
//! - Error taxonomy
//! - Configuration loading
//! - DX code transcoding (extract / full code / two-part DX number)
//! - Full-text query sanitization
//! - Film data model
//! - Search filter validation and normalization
//! - URL slug generation

pub mod config;
pub mod dx;
pub mod error;
pub mod film;
pub mod filter;
pub mod text;
pub mod url;

pub use error::{Error, Result};
pub use filter::SearchFilter;
