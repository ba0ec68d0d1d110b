//! Bounded substring search over a drug slice.
//!
//! A deliberate O(n) linear scan with no relevance ranking: the catalog
//! tops out at a few thousand records and results keep publication order.

use crate::models::Drug;

/// Queries shorter than this (in Unicode scalars) are rejected outright
/// to avoid scanning the whole list on trivial input.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on returned matches.
pub const MAX_RESULTS: usize = 20;

/// Find drugs matching `query`, in input order, truncated to
/// [`MAX_RESULTS`].
///
/// A drug matches when its display name contains the query as-is
/// (case-sensitive - display names are largely Korean script, where case
/// folding is meaningless), or when its ingredient name contains the
/// query case-insensitively (ingredient names are Latin script and users
/// type them in any case).
pub fn search(drugs: &[Drug], query: &str) -> Vec<Drug> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    drugs
        .iter()
        .filter(|d| {
            d.name.contains(query) || d.ingredient_name.to_lowercase().contains(&query_lower)
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}
