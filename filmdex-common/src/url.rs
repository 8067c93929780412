//! URL slug generation for film pages
//!
//! Every film is addressed by a unique URL-safe name derived from its
//! catalog name. Uniqueness is tracked by an explicit generator context owned
//! by the import run, not by process-wide state.

use std::collections::HashSet;

/// Reduce a name to its URL-safe form: lower-case, spaces to dashes, then
/// only `[a-z0-9-_]` retained.
pub fn url_safe_str(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .collect()
}

/// Generates unique URL slugs within one catalog import run.
///
/// Duplicate names get a `-N` suffix, counting up from 1. The set of used
/// slugs is owned by this generator; drop it (or call [`reset`]) when the
/// import run ends.
///
/// [`reset`]: UniqueUrlGenerator::reset
#[derive(Debug, Default)]
pub struct UniqueUrlGenerator {
    existing_urls: HashSet<String>,
}

impl UniqueUrlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all previously generated slugs
    pub fn reset(&mut self) {
        self.existing_urls.clear();
    }

    /// Generate a slug for `name`, unique among all slugs generated so far
    pub fn generate(&mut self, name: &str) -> String {
        let base_url = url_safe_str(name);
        let mut unique_url = base_url.clone();
        let mut counter = 1;
        while self.existing_urls.contains(&unique_url) {
            unique_url = format!("{}-{}", base_url, counter);
            counter += 1;
        }
        self.existing_urls.insert(unique_url.clone());
        unique_url
    }
}
