//! Film type reference table
//!
//! Maps a DX extract to a descriptive manufacturer/type label through
//! `(dx_min, dx_max)` ranges. Ranges may overlap by design: later rows are
//! more specific refinements of earlier, broader ones, so the last loaded
//! range containing the value wins.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// One labeled DX extract range
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FilmTypeRange {
    pub dx_min: i64,
    pub dx_max: i64,
    pub label: String,
}

/// Static film type lookup table, loaded once at startup
#[derive(Debug, Default)]
pub struct FilmTypeTable {
    ranges: Vec<FilmTypeRange>,
}

impl FilmTypeTable {
    pub fn new(ranges: Vec<FilmTypeRange>) -> Self {
        Self { ranges }
    }

    /// Load the ranges from the catalog in insertion order
    pub async fn load(pool: &SqlitePool) -> Result<Self> {
        let ranges = sqlx::query_as::<_, FilmTypeRange>(
            "SELECT dx_min, dx_max, label FROM film_types ORDER BY rowid",
        )
        .fetch_all(pool)
        .await
        .context("Failed to load film types")?;
        Ok(Self::new(ranges))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Return the film type label for the given DX extract, None if no
    /// range contains it. Last matching range wins.
    pub fn resolve(&self, dx_extract: &str) -> Option<&str> {
        let value: i64 = dx_extract.trim().parse().ok()?;
        self.ranges
            .iter()
            .rev()
            .find(|r| r.dx_min <= value && value <= r.dx_max)
            .map(|r| r.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(dx_min: i64, dx_max: i64, label: &str) -> FilmTypeRange {
        FilmTypeRange {
            dx_min,
            dx_max,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_resolve_in_range() {
        let table = FilmTypeTable::new(vec![range(16, 2047, "Generic")]);
        assert_eq!(table.resolve("2594"), None);
        assert_eq!(table.resolve("0112"), Some("Generic"));
    }

    #[test]
    fn test_later_overlapping_range_wins() {
        let table = FilmTypeTable::new(vec![
            range(0, 2047, "Generic color film"),
            range(100, 200, "Kodak color negative"),
        ]);
        assert_eq!(table.resolve("0150"), Some("Kodak color negative"));
        assert_eq!(table.resolve("0099"), Some("Generic color film"));
        assert_eq!(table.resolve("0201"), Some("Generic color film"));
    }

    #[test]
    fn test_no_match_and_garbage() {
        let table = FilmTypeTable::new(vec![range(16, 100, "Early")]);
        assert_eq!(table.resolve("2000"), None);
        assert_eq!(table.resolve("not a number"), None);
    }

    #[test]
    fn test_leading_zeros_parse() {
        let table = FilmTypeTable::new(vec![range(100, 200, "Mid")]);
        assert_eq!(table.resolve("0150"), Some("Mid"));
    }
}
