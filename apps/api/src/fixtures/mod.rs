// Read-only fixture records served by the dashboard API, plus the store
// that loads and indexes them.

pub mod handlers;
pub mod models;
pub mod store;

use std::cmp::Ordering;

/// Normalises a free-text search term. Blank terms mean "no filter".
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive substring check against an already-lowercased term.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

/// Numeric ids sort numerically ("2" before "10"); anything else lexically.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
