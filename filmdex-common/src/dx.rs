//! DX code transcoding
//!
//! A film's DX identity exists in three forms:
//! - the 4-digit "extract" code (`"2594"`),
//! - the 6-digit "full" code (`"025943"`), whose digits 2-5 should match the
//!   extract,
//! - the human-entered two-part "DX number" (`"162-2"`), where the code space
//!   is organized as 16-wide generations per product line
//!   (`extract = 16 * part1 + part2`).

use crate::error::{Error, Result};
use crate::text::collapse_spaces;

/// Number of digits of a DX extract code
pub const DX_EXTRACT_DIGITS: usize = 4;

/// Number of digits of a DX full code
pub const DX_FULL_DIGITS: usize = 6;

/// Smallest extract in the defined DX code space (product line 1, generation 0)
pub const DX_EXTRACT_MIN: u32 = 16;

/// Largest extract in the defined DX code space (product line 127, generation 15)
pub const DX_EXTRACT_MAX: u32 = 2047;

/// Separators accepted between the two parts of a DX number.
/// "-" is the documented one, the others are tolerated.
const DX_NUMBER_SEPARATORS: [char; 3] = ['-', ' ', '/'];

/// Normalize a DX code to a zero-padded numeric string of `max_digits` digits.
///
/// Empty input is "no value", not an error. Input that does not parse as a
/// non-negative integer, or whose value needs more than `max_digits` digits,
/// fails with [`Error::InvalidCodeFormat`].
///
/// # Examples
///
/// ```
/// use filmdex_common::dx::parse_dx_code;
///
/// assert_eq!(parse_dx_code("2594", 4).unwrap(), Some("2594".to_string()));
/// assert_eq!(parse_dx_code("94", 4).unwrap(), Some("0094".to_string()));
/// assert_eq!(parse_dx_code("", 4).unwrap(), None);
/// assert!(parse_dx_code("99999", 4).is_err());
/// ```
pub fn parse_dx_code(raw: &str, max_digits: usize) -> Result<Option<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: u64 = raw
        .parse()
        .map_err(|_| Error::InvalidCodeFormat(max_digits))?;
    let result = format!("{:0width$}", value, width = max_digits);
    if result.len() > max_digits {
        return Err(Error::InvalidCodeFormat(max_digits));
    }
    Ok(Some(result))
}

/// Convert a two-part DX number to a 4-digit DX extract.
///
/// Accepts two integer parts separated by `-`, space or `/` (repeated
/// separators are collapsed first). Parts beyond the second are ignored, so
/// inputs carrying a half-frame suffix ("162-16/21A") still resolve.
///
/// # Examples
///
/// ```
/// use filmdex_common::dx::dx_number_to_extract;
///
/// assert_eq!(dx_number_to_extract("162-2").unwrap(), Some("2594".to_string()));
/// assert_eq!(dx_number_to_extract("7-0").unwrap(), Some("0112".to_string()));
/// assert!(dx_number_to_extract("162").is_err());
/// ```
pub fn dx_number_to_extract(raw: &str) -> Result<Option<String>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let spaced: String = raw
        .chars()
        .map(|c| if DX_NUMBER_SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    let spaced = collapse_spaces(&spaced);
    let mut parts = spaced.split_whitespace();
    let part_1: u64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(Error::InvalidDxNumberFormat)?;
    let part_2: u64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(Error::InvalidDxNumberFormat)?;
    Ok(Some(format!("{:04}", 16 * part_1 + part_2)))
}

/// Convert a 4-digit DX extract to its two-part DX number form ("162-2").
///
/// The defined domain is `16..=2047`; outside it (or for non-numeric input)
/// this returns `None` rather than an error: the DX number is a cosmetic
/// label, not an authoritative value.
pub fn extract_to_dx_number(extract: &str) -> Option<String> {
    let value: u32 = extract.trim().parse().ok()?;
    if !(DX_EXTRACT_MIN..=DX_EXTRACT_MAX).contains(&value) {
        return None;
    }
    Some(format!("{}-{}", value / 16, value % 16))
}
