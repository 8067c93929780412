//! Full-text query sanitization
//!
//! The catalog's `name` and `manufacturer` columns are matched through the
//! SQLite full-text index. Raw user text must not reach the MATCH operator:
//! parentheses, quotes and wildcard characters are query syntax there.

/// Characters that are syntactically significant to the full-text engine or
/// denote wildcards. Each is replaced by a space before matching.
const FORBIDDEN_PATTERNS: [char; 13] = [
    '(', ')', ':', '\\', '/', '<', '>', '$', '*', '%', '_', '&', '"',
];

/// Minimum term length for prefix-wildcard matching. Shorter fragments are
/// kept as exact tokens to avoid a full-table scan on the text index.
const WILDCARD_MIN_TERM_LEN: usize = 3;

/// Collapse every run of multiple spaces to a single space.
///
/// Repeated substitution until stable, so `"a    b"` becomes `"a b"` in one
/// call regardless of run length.
pub fn collapse_spaces(text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let collapsed = result.replace("  ", " ");
        if collapsed == result {
            return result;
        }
        result = collapsed;
    }
}

/// Normalize free text into a form safe for a full-text MATCH predicate.
///
/// Strips the engine's special characters, collapses the resulting space
/// runs and lower-cases. Empty input yields an empty string, not an error;
/// callers must check emptiness before using the result as a filter.
pub fn sanitize_fulltext(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if FORBIDDEN_PATTERNS.contains(&c) { ' ' } else { c })
        .collect();
    collapse_spaces(&replaced).to_lowercase()
}

/// Build a full-text MATCH search parameter from free text.
///
/// Appends a trailing prefix wildcard only when at least one term is long
/// enough; short fragments stay exact since they are false-positive magnets
/// under wildcard search.
pub fn fulltext_match_param(text: &str) -> String {
    let mut result = sanitize_fulltext(text);
    if result
        .split(' ')
        .any(|keyword| keyword.len() >= WILDCARD_MIN_TERM_LEN)
    {
        result.push('*');
    }
    result
}
