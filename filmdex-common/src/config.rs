//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (applied by the binary, highest priority)
//! 2. Environment variable (`FILMDEX_*`)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// CDN base URLs able to serve images from the open source film database
/// repository. The first entry is used to absolutize picture paths.
const DEFAULT_CDN_BASE_URLS: [&str; 3] = [
    "https://cdn.jsdelivr.net/gh/merinorus/Open-source-film-database@main/Images/",
    "https://cdn.statically.io/gh/merinorus/Open-source-film-database/main/Images/",
    "https://rawcdn.githack.com/Merinorus/Open-source-film-database/main/Images/",
];

const DEFAULT_DATABASE_PATH: &str = "data/film_database.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Service settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the SQLite catalog, created from the film database repo
    pub database_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Image CDN base URLs (non-empty; first entry is used)
    pub image_cdn_base_urls: Vec<String>,
}

/// Optional fields as they appear in the TOML config file
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_path: Option<PathBuf>,
    bind_address: Option<String>,
    image_cdn_base_urls: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            image_cdn_base_urls: DEFAULT_CDN_BASE_URLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Load settings from the given config file (or the default location),
    /// then apply environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = Settings::default();

        let file = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_file(),
        };
        if let Some(path) = file {
            if path.exists() {
                settings.apply_file(&read_config_file(&path)?);
            } else if config_file.is_some() {
                // An explicitly requested file must exist
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        settings.apply_env();
        settings.validate()?;
        Ok(settings)
    }

    fn apply_file(&mut self, file: &FileSettings) {
        if let Some(path) = &file.database_path {
            self.database_path = path.clone();
        }
        if let Some(addr) = &file.bind_address {
            self.bind_address = addr.clone();
        }
        if let Some(urls) = &file.image_cdn_base_urls {
            self.image_cdn_base_urls = urls.clone();
        }
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("FILMDEX_DATABASE") {
            self.database_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("FILMDEX_BIND") {
            self.bind_address = addr;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.image_cdn_base_urls.is_empty() {
            return Err(Error::Config(
                "image_cdn_base_urls must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL used to absolutize film picture paths
    pub fn image_cdn_base_url(&self) -> &str {
        &self.image_cdn_base_urls[0]
    }
}

fn read_config_file(path: &Path) -> Result<FileSettings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Default platform config file location (`<config dir>/filmdex/config.toml`)
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("filmdex").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert!(settings.image_cdn_base_url().starts_with("https://"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database_path = \"/tmp/films.db\"\nbind_address = \"0.0.0.0:9000\""
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.database_path, PathBuf::from("/tmp/films.db"));
        assert_eq!(settings.bind_address, "0.0.0.0:9000");
        // Untouched fields keep their defaults
        assert!(!settings.image_cdn_base_urls.is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/filmdex.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_cdn_list_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "image_cdn_base_urls = []").unwrap();
        let result = Settings::load(Some(file.path()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
