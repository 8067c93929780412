//! Catalog search engine and film lookups
//!
//! Builds filtered queries against the `films` full-text table, lets SQLite
//! do a coarse ordering, then refines the ranking in memory before cutting
//! the list down to the requested limit.

use sqlx::SqlitePool;
use tracing::error;

use filmdex_common::film::{cdn_picture_url, AvailabilityStatus, FilmRecord};
use filmdex_common::filter::{SearchFilter, MAX_RESULTS};
use filmdex_common::text::{fulltext_match_param, sanitize_fulltext};
use filmdex_common::url::url_safe_str;
use filmdex_common::{Error, Result};

/// Raw catalog row. The `films` table is a full-text table, so every column
/// comes back as text (or NULL); typing happens in [`FilmRow::into_record`].
#[derive(Debug, sqlx::FromRow)]
pub struct FilmRow {
    pub dx_extract: Option<String>,
    pub dx_full: Option<String>,
    pub name: String,
    pub url_name: String,
    pub og_film_or_information: Option<String>,
    pub reliability: Option<String>,
    pub manufacturer: Option<String>,
    pub country: Option<String>,
    pub begin_year: Option<String>,
    pub end_year: Option<String>,
    pub distributor: Option<String>,
    pub availability: Option<String>,
    pub picture: Option<String>,
}

impl FilmRow {
    /// Convert to the typed record, mapping empty strings to absent and
    /// absolutizing the picture path against the image CDN.
    pub fn into_record(self, cdn_base_url: &str) -> FilmRecord {
        let manufacturer = none_if_empty(self.manufacturer);
        let manufacturers = FilmRecord::split_manufacturers(manufacturer.as_deref());
        FilmRecord {
            dx_extract: none_if_empty(self.dx_extract),
            dx_full: none_if_empty(self.dx_full),
            name: self.name,
            url_name: self.url_name,
            og_film_or_information: none_if_empty(self.og_film_or_information),
            reliability: none_if_empty(self.reliability).and_then(|v| v.parse().ok()),
            manufacturer,
            manufacturers,
            country: none_if_empty(self.country),
            begin_year: none_if_empty(self.begin_year),
            end_year: none_if_empty(self.end_year),
            distributor: none_if_empty(self.distributor),
            availability: none_if_empty(self.availability)
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(AvailabilityStatus::from_code),
            picture: none_if_empty(self.picture).map(|p| cdn_picture_url(cdn_base_url, &p)),
        }
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Search the catalog with a normalized filter.
///
/// All predicates are AND-combined. SQLite returns at most
/// `min(10 * limit, MAX_RESULTS)` rows in its own coarse order; the ranking
/// refinement below can pull rows from anywhere in that window to the top,
/// so cropping to `limit` only happens at the very end.
///
/// A store-level query failure is logged and yields an empty result list:
/// a search must never take the page down with it.
pub async fn search(
    pool: &SqlitePool,
    filter: &SearchFilter,
    cdn_base_url: &str,
) -> Result<Vec<FilmRecord>> {
    if !filter.has_criteria() {
        return Err(Error::NoSearchCriteria);
    }

    let mut sql = String::from("SELECT * FROM films WHERE 1=1");
    let mut params: Vec<String> = Vec::new();

    let dx_extract = filter.dx_extract.as_deref().map(|v| format!("{:0>4}", v));
    let dx_full = filter.dx_full.as_deref().map(|v| format!("{:0>6}", v));

    if let Some(dx_extract) = &dx_extract {
        sql.push_str(" AND dx_extract = ?");
        params.push(dx_extract.clone());
    }
    if let Some(dx_full) = &dx_full {
        // The 1st digit only encodes the film sort and the 6th the number of
        // exposures, so the effective filter is the middle four digits.
        // Some catalog entries still have mismatching extract/full pairs,
        // hence the "OR dx_full = ?" arm: an exact full-code match must be
        // found even when the derived extract would exclude it.
        let dx_full_cropped = &dx_full[1..5];
        let guessed_dx_extract = dx_extract
            .clone()
            .unwrap_or_else(|| dx_full_cropped.to_string());
        sql.push_str(" AND (dx_extract = ? AND dx_full LIKE ? OR dx_full = ?)");
        params.push(guessed_dx_extract);
        params.push(format!("_{}_", dx_full_cropped));
        params.push(dx_full.clone());
    }
    if let Some(name) = &filter.name {
        let token = fulltext_match_param(name);
        if !token.trim().is_empty() {
            sql.push_str(" AND name MATCH ?");
            params.push(format!("\"{}\"", token));
        }
    }
    if let Some(manufacturer) = &filter.manufacturer {
        let token = fulltext_match_param(manufacturer);
        if !token.trim().is_empty() {
            sql.push_str(" AND manufacturer MATCH ?");
            params.push(format!("\"{}\"", token));
        }
    }

    // Criteria can vanish here when free text sanitizes down to nothing
    if params.is_empty() {
        return Err(Error::NoSearchCriteria);
    }

    let mut order_by: Vec<&str> = Vec::new();
    if dx_extract.is_some() || dx_full.is_some() {
        order_by.push("CASE WHEN dx_full IS NULL THEN 1 ELSE 0 END, dx_full, dx_extract");
    }
    if filter.manufacturer.is_some() {
        order_by.push("manufacturer");
    }
    order_by.push("name, rowid");
    sql.push_str(" ORDER BY ");
    sql.push_str(&order_by.join(", "));
    sql.push_str(" LIMIT ?");

    // Do not crop too early: the refinement below may promote rows the
    // store ordered past `limit`.
    let query_limit = (10 * filter.limit).min(MAX_RESULTS) as i64;

    let mut query = sqlx::query_as::<_, FilmRow>(&sql);
    for param in &params {
        query = query.bind(param.as_str());
    }
    query = query.bind(query_limit);

    let rows = match query.fetch_all(pool).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Catalog query failed, returning no results: {}", e);
            Vec::new()
        }
    };

    let mut films: Vec<FilmRecord> = rows
        .into_iter()
        .map(|row| row.into_record(cdn_base_url))
        .collect();

    // Ranking refinement: a sequence of stable sorts, each boosting matches
    // of one comparator to the front. Later passes are more specific and win
    // ties; earlier passes survive as tie-breaks because the sorts are stable.
    if filter.name.is_some()
        && dx_extract.is_none()
        && dx_full.is_none()
        && filter.manufacturer.is_none()
    {
        let name = filter.name.as_deref().unwrap_or_default();
        let needle_sanitized = sanitize_fulltext(name);
        let needle_lower = name.to_lowercase();

        // contains the provided name, ignoring the special characters
        films.sort_by_key(|f| !sanitize_fulltext(&f.name).contains(&needle_sanitized));
        // starts with the provided name, ignoring the special characters
        films.sort_by_key(|f| !sanitize_fulltext(&f.name).starts_with(&needle_sanitized));
        // contains the exact provided name
        films.sort_by_key(|f| !f.name.to_lowercase().contains(&needle_lower));
        // starts with the exact provided name
        films.sort_by_key(|f| !f.name.to_lowercase().starts_with(&needle_lower));
        // is exactly the provided name
        films.sort_by_key(|f| f.name.to_lowercase() != needle_lower);
    }

    // A DX full code can match several films differing only in the trailing
    // exposure-count digit (eg 025943 / 025941): surface the near-duplicates,
    // exact match first.
    if let Some(dx_full) = &dx_full {
        let prefix = &dx_full[..dx_full.len() - 1];
        films.sort_by_key(|f| {
            !f.dx_full
                .as_deref()
                .map_or(false, |v| v.starts_with(prefix))
        });
        films.sort_by_key(|f| f.dx_full.as_deref() != Some(dx_full.as_str()));
    }

    films.truncate(filter.limit);
    Ok(films)
}

/// Return a film by its URL-safe name.
///
/// URL-unsafe input is silently refused (all films in the catalog carry a
/// valid URL-safe name, so such a request cannot match anything).
pub async fn get_by_url(
    pool: &SqlitePool,
    url_name: &str,
    cdn_base_url: &str,
) -> Result<Option<FilmRecord>> {
    if url_name != url_safe_str(url_name) {
        return Ok(None);
    }
    let row = sqlx::query_as::<_, FilmRow>("SELECT * FROM films WHERE url_name = ?")
        .bind(url_name)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.into_record(cdn_base_url)))
}

/// Return a film by its SQLite row ID (used for the random home-page pick)
pub async fn get_by_rowid(
    pool: &SqlitePool,
    rowid: i64,
    cdn_base_url: &str,
) -> Result<Option<FilmRecord>> {
    let row = sqlx::query_as::<_, FilmRow>("SELECT * FROM films WHERE rowid = ?")
        .bind(rowid)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.into_record(cdn_base_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_maps_empty_strings_to_none() {
        let row = FilmRow {
            dx_extract: Some("".into()),
            dx_full: Some("025943".into()),
            name: "Kodachrome 64".into(),
            url_name: "kodachrome-64".into(),
            og_film_or_information: None,
            reliability: Some("3".into()),
            manufacturer: Some("Kodak, Eastman Kodak".into()),
            country: Some("".into()),
            begin_year: None,
            end_year: None,
            distributor: None,
            availability: Some("0".into()),
            picture: Some("kodachrome.jpg".into()),
        };
        let record = row.into_record("https://cdn.example.com/Images/");
        assert_eq!(record.dx_extract, None);
        assert_eq!(record.dx_full.as_deref(), Some("025943"));
        assert_eq!(record.country, None);
        assert_eq!(record.reliability, Some(3));
        assert_eq!(record.availability, Some(AvailabilityStatus::Discontinued));
        assert_eq!(
            record.manufacturers,
            vec!["Kodak".to_string(), "Eastman Kodak".to_string()]
        );
        assert_eq!(
            record.picture.as_deref(),
            Some("https://cdn.example.com/Images/kodachrome.jpg")
        );
    }

    #[test]
    fn test_into_record_unparseable_numbers_become_absent() {
        let row = FilmRow {
            dx_extract: None,
            dx_full: None,
            name: "Mystery Film".into(),
            url_name: "mystery-film".into(),
            og_film_or_information: None,
            reliability: Some("high".into()),
            manufacturer: None,
            country: None,
            begin_year: None,
            end_year: None,
            distributor: None,
            availability: Some("9".into()),
            picture: None,
        };
        let record = row.into_record("https://cdn.example.com/");
        assert_eq!(record.reliability, None);
        assert_eq!(record.availability, None);
    }
}
