//! Film data model
//!
//! A [`FilmRecord`] is a read-only snapshot of one catalog row, taken at
//! query time. Nothing in the service mutates or persists it.

use serde::{Serialize, Serializer};

/// Market availability of a film stock.
///
/// The catalog encodes two distinct "on the market" codes; both carry the
/// same meaning for display and JSON purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Discontinued,
    Unknown,
    OnTheMarket,
    OnTheMarketBis,
}

impl AvailabilityStatus {
    /// Decode the catalog's numeric availability code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(AvailabilityStatus::Discontinued),
            1 => Some(AvailabilityStatus::Unknown),
            2 => Some(AvailabilityStatus::OnTheMarket),
            3 => Some(AvailabilityStatus::OnTheMarketBis),
            _ => None,
        }
    }

    /// Label used in JSON responses. Absent availability reads as "unknown".
    pub fn json_label(status: Option<Self>) -> &'static str {
        match status {
            Some(AvailabilityStatus::Discontinued) => "discontinued",
            Some(AvailabilityStatus::OnTheMarket)
            | Some(AvailabilityStatus::OnTheMarketBis) => "on_the_market",
            Some(AvailabilityStatus::Unknown) | None => "unknown",
        }
    }

    /// Label used on HTML pages, with availability coloring
    pub fn html_label(status: Option<Self>) -> &'static str {
        match status {
            Some(AvailabilityStatus::Discontinued) => {
                "<font color=red>discontinued :(</font>"
            }
            Some(AvailabilityStatus::OnTheMarket)
            | Some(AvailabilityStatus::OnTheMarketBis) => {
                "<font color=green>on the market</font>"
            }
            Some(AvailabilityStatus::Unknown) | None => "unknown",
        }
    }
}

impl Serialize for AvailabilityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(AvailabilityStatus::json_label(Some(*self)))
    }
}

/// One film stock from the catalog
#[derive(Debug, Clone, Serialize)]
pub struct FilmRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx_extract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx_full: Option<String>,
    pub name: String,
    pub url_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_film_or_information: Option<String>,
    /// Data reliability score, 0 (dubious) to 4 (confirmed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability: Option<u8>,
    /// Comma-separated source string, as stored in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Individual manufacturer names split out of `manufacturer`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manufacturers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityStatus>,
    /// Absolute picture URL (catalog stores a path relative to the image CDN)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl FilmRecord {
    /// True if both DX codes are present but disagree: the extract should be
    /// digits 2-5 of the full code. Means one or the other was recorded
    /// incorrectly.
    pub fn dx_extract_full_mismatch(&self) -> bool {
        match (&self.dx_extract, &self.dx_full) {
            (Some(extract), Some(full)) => full.get(1..5) != Some(extract.as_str()),
            _ => false,
        }
    }

    /// Split the comma-separated manufacturer string into a list
    pub fn split_manufacturers(manufacturer: Option<&str>) -> Vec<String> {
        manufacturer
            .map(|m| m.split(", ").map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Join a picture path onto the image CDN base URL
pub fn cdn_picture_url(base_url: &str, picture: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        picture.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dx_extract: Option<&str>, dx_full: Option<&str>) -> FilmRecord {
        FilmRecord {
            dx_extract: dx_extract.map(str::to_string),
            dx_full: dx_full.map(str::to_string),
            name: "Test Film".into(),
            url_name: "test-film".into(),
            og_film_or_information: None,
            reliability: None,
            manufacturer: None,
            manufacturers: Vec::new(),
            country: None,
            begin_year: None,
            end_year: None,
            distributor: None,
            availability: None,
            picture: None,
        }
    }

    #[test]
    fn test_mismatch_detection() {
        assert!(!record(Some("2594"), Some("025943")).dx_extract_full_mismatch());
        assert!(record(Some("2594"), Some("025143")).dx_extract_full_mismatch());
        // One side absent: nothing to disagree about
        assert!(!record(Some("2594"), None).dx_extract_full_mismatch());
        assert!(!record(None, Some("025943")).dx_extract_full_mismatch());
    }

    #[test]
    fn test_split_manufacturers() {
        assert_eq!(
            FilmRecord::split_manufacturers(Some("Kodak, Eastman Kodak")),
            vec!["Kodak".to_string(), "Eastman Kodak".to_string()]
        );
        assert_eq!(
            FilmRecord::split_manufacturers(Some("Ilford")),
            vec!["Ilford".to_string()]
        );
        assert!(FilmRecord::split_manufacturers(None).is_empty());
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(
            AvailabilityStatus::json_label(Some(AvailabilityStatus::OnTheMarketBis)),
            "on_the_market"
        );
        assert_eq!(
            AvailabilityStatus::json_label(Some(AvailabilityStatus::Discontinued)),
            "discontinued"
        );
        assert_eq!(AvailabilityStatus::json_label(None), "unknown");
        assert_eq!(AvailabilityStatus::from_code(9), None);
    }

    #[test]
    fn test_cdn_picture_url() {
        assert_eq!(
            cdn_picture_url("https://cdn.example.com/Images/", "kodak.jpg"),
            "https://cdn.example.com/Images/kodak.jpg"
        );
        assert_eq!(
            cdn_picture_url("https://cdn.example.com/Images", "/kodak.jpg"),
            "https://cdn.example.com/Images/kodak.jpg"
        );
    }
}
