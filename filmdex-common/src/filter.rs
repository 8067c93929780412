//! Search filter validation and normalization
//!
//! A raw [`SearchFilter`] arrives straight from the query string. Before it
//! may touch the catalog it goes through [`SearchFilter::normalize`], which
//! either produces a canonical filter or rejects the request. All failures
//! are detected here, synchronously, before any store access.

use serde::Deserialize;

use crate::dx::{dx_number_to_extract, parse_dx_code, DX_EXTRACT_DIGITS, DX_FULL_DIGITS};
use crate::error::{Error, Result};

/// Hard cap on results for any search request
pub const MAX_RESULTS: usize = 101;

/// Default result limit when the client does not ask for one
pub const DEFAULT_LIMIT: usize = 100;

/// Room for unnecessary spaces or a half-frame suffix (eg "162-16/21A");
/// the extra data is stripped during parsing anyway.
const DX_NUMBER_MAX_LEN: usize = 10;

const TEXT_FIELD_MAX_LEN: usize = 255;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Search criteria for a catalog lookup, one per request.
///
/// `dx_number` and `dx_extract` are mutually exclusive inputs; normalization
/// resolves a supplied `dx_number` into `dx_extract` and clears it, so a
/// normalized filter carries at most one effective code filter (plus
/// optionally `dx_full`).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFilter {
    /// Two-part DX number ("XXX-YY" form, eg "115-10")
    #[serde(default)]
    pub dx_number: Option<String>,
    /// 4-digit DX extract (eg "2594")
    #[serde(default)]
    pub dx_extract: Option<String>,
    /// 6-digit DX full code (eg "025943")
    #[serde(default)]
    pub dx_full: Option<String>,
    /// Film name, free text
    #[serde(default)]
    pub name: Option<String>,
    /// Manufacturer name, free text
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Maximum number of results to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter {
            dx_number: None,
            dx_extract: None,
            dx_full: None,
            name: None,
            manufacturer: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchFilter {
    /// True if at least one usable search criterion is set
    pub fn has_criteria(&self) -> bool {
        self.dx_extract.is_some()
            || self.dx_full.is_some()
            || self.name.is_some()
            || self.manufacturer.is_some()
    }

    /// Validate and canonicalize the filter.
    ///
    /// - trims all string fields, mapping empty strings to absent
    /// - rejects conflicting `dx_extract` + `dx_number` inputs
    /// - zero-pads and bounds-checks both DX codes
    /// - resolves `dx_number` into `dx_extract` (clearing `dx_number`)
    /// - rejects filters that end up with no criteria at all
    pub fn normalize(mut self) -> Result<SearchFilter> {
        self.dx_number = trim_to_none(self.dx_number);
        self.dx_extract = trim_to_none(self.dx_extract);
        self.dx_full = trim_to_none(self.dx_full);
        self.name = trim_to_none(self.name);
        self.manufacturer = trim_to_none(self.manufacturer);

        check_len("dx_number", &self.dx_number, DX_NUMBER_MAX_LEN)?;
        check_len("dx_extract", &self.dx_extract, DX_EXTRACT_DIGITS)?;
        check_len("dx_full", &self.dx_full, DX_FULL_DIGITS)?;
        check_len("name", &self.name, TEXT_FIELD_MAX_LEN)?;
        check_len("manufacturer", &self.manufacturer, TEXT_FIELD_MAX_LEN)?;

        if self.limit == 0 || self.limit > MAX_RESULTS {
            return Err(Error::InvalidInput(format!(
                "limit must be between 1 and {}",
                MAX_RESULTS
            )));
        }

        if self.dx_extract.is_some() && self.dx_number.is_some() {
            return Err(Error::ConflictingCodeInputs);
        }

        if let Some(raw) = self.dx_extract.take() {
            self.dx_extract = parse_dx_code(&raw, DX_EXTRACT_DIGITS)?;
        }
        if let Some(raw) = self.dx_full.take() {
            self.dx_full = parse_dx_code(&raw, DX_FULL_DIGITS)?;
        }

        if self.dx_extract.is_none() {
            if let Some(dx_number) = self.dx_number.take() {
                self.dx_extract = dx_number_to_extract(&dx_number)?;
            }
        }

        if !self.has_criteria() {
            return Err(Error::NoSearchCriteria);
        }

        Ok(self)
    }
}

fn trim_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn check_len(field: &str, value: &Option<String>, max_len: usize) -> Result<()> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(Error::InvalidInput(format!(
                "{} too long (max {} characters)",
                field, max_len
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> SearchFilter {
        SearchFilter {
            limit: DEFAULT_LIMIT,
            ..SearchFilter::default()
        }
    }

    #[test]
    fn test_conflicting_code_inputs_rejected() {
        let result = SearchFilter {
            dx_number: Some("162-2".into()),
            dx_extract: Some("2594".into()),
            ..filter()
        }
        .normalize();
        assert!(matches!(result, Err(Error::ConflictingCodeInputs)));
    }

    #[test]
    fn test_empty_filter_rejected() {
        assert!(matches!(
            filter().normalize(),
            Err(Error::NoSearchCriteria)
        ));
    }

    #[test]
    fn test_whitespace_only_fields_are_absent() {
        let result = SearchFilter {
            name: Some("   ".into()),
            dx_extract: Some("".into()),
            ..filter()
        }
        .normalize();
        assert!(matches!(result, Err(Error::NoSearchCriteria)));
    }

    #[test]
    fn test_dx_number_resolved_into_extract() {
        let normalized = SearchFilter {
            dx_number: Some("162-2".into()),
            ..filter()
        }
        .normalize()
        .unwrap();
        assert_eq!(normalized.dx_extract.as_deref(), Some("2594"));
        assert_eq!(normalized.dx_number, None);
    }

    #[test]
    fn test_codes_zero_padded() {
        let normalized = SearchFilter {
            dx_extract: Some("94".into()),
            dx_full: Some("5943".into()),
            ..filter()
        }
        .normalize()
        .unwrap();
        assert_eq!(normalized.dx_extract.as_deref(), Some("0094"));
        assert_eq!(normalized.dx_full.as_deref(), Some("005943"));
    }

    #[test]
    fn test_invalid_codes_rejected() {
        assert!(matches!(
            SearchFilter {
                dx_extract: Some("abcd".into()),
                ..filter()
            }
            .normalize(),
            Err(Error::InvalidCodeFormat(4))
        ));
        assert!(matches!(
            SearchFilter {
                dx_number: Some("162".into()),
                ..filter()
            }
            .normalize(),
            Err(Error::InvalidDxNumberFormat)
        ));
    }

    #[test]
    fn test_limit_bounds() {
        let too_big = SearchFilter {
            name: Some("Kodachrome".into()),
            limit: MAX_RESULTS + 1,
            ..filter()
        }
        .normalize();
        assert!(matches!(too_big, Err(Error::InvalidInput(_))));

        let zero = SearchFilter {
            name: Some("Kodachrome".into()),
            limit: 0,
            ..filter()
        }
        .normalize();
        assert!(matches!(zero, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_field_length_bounds() {
        let result = SearchFilter {
            name: Some("x".repeat(256)),
            ..filter()
        }
        .normalize();
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let result = SearchFilter {
            dx_number: Some("162-16/21A4".into()),
            ..filter()
        }
        .normalize();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_valid_text_search_passes_through() {
        let normalized = SearchFilter {
            name: Some("  Kodachrome  ".into()),
            manufacturer: Some("Kodak".into()),
            ..filter()
        }
        .normalize()
        .unwrap();
        assert_eq!(normalized.name.as_deref(), Some("Kodachrome"));
        assert_eq!(normalized.manufacturer.as_deref(), Some("Kodak"));
        assert_eq!(normalized.limit, DEFAULT_LIMIT);
    }
}
